// Crate entry point. Re-export modules so tests and embedders can import them easily.

pub mod adapters {
    pub mod in_memory {
        pub mod in_memory_calendar_store;
    }
}
pub mod application {
    pub mod errors;
    pub mod command_handlers {
        pub mod review_handler;
        pub mod submit_handler;
    }
}
pub mod core {
    pub mod leave_request;
    pub mod ports;
}
pub mod telemetry;
pub mod test_support {
    pub mod fixtures {
        pub mod commands {
            pub mod submit_leave_request;
        }
    }
}
