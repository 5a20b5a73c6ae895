// This module groups leave request domain components.
//
// Structure
// - half_day.rs: half-day endpoint value types and half-unit arithmetic
// - interval.rs: the leave interval and its covered half-unit span
// - state.rs: the leave request record and its status lifecycle
// - decider/: pure decision logic per command intent
//
// Boundaries
// - Everything under this module is framework-free and performs no input or output.

pub mod half_day;
pub mod interval;
pub mod state;
pub mod decider {
    pub mod submit {
        pub mod command;
        pub mod decide;
    }
}
