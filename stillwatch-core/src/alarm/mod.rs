//! Latching over-temperature alarm
//!
//! The state machine is explicit, finite and deterministic. Every
//! transition is a function of the current status and one input (a
//! command or a reading); each input produces at most one transition.
//!
//! ```text
//!              arm                 reading >= threshold
//!  Disabled ─────────► Armed ─────────────────────────► Triggered
//!     ▲                  ▲                                  │
//!     │                  │ arm                  acknowledge │
//!     │                  └──────── Acknowledged ◄───────────┘
//!     │                                 │
//!     └──────── disable (from any) ─────┘
//! ```

pub mod events;
pub mod machine;
pub mod supervisor;

pub use events::{SupervisorEvent, EVENT_HISTORY_LEN};
pub use machine::{AlarmCommand, AlarmStatus, CommandError, Transition, TransitionCause};
pub use supervisor::{AlarmState, AlarmSupervisor};
