pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod identity;
    }
}

pub mod modules {
    pub mod scheduling {
        pub mod core {
            pub mod activity;
            pub mod clock_window;
            pub mod schedule;
            pub mod shift;
            pub mod shift_update;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod manage_schedules {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_shifts {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod log_activity {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http_error;
                pub mod identity;
            }
            pub mod outbound {
                pub mod activity_log;
                pub mod activity_log_in_memory;
                pub mod employee_directory;
                pub mod employee_directory_in_memory;
                pub mod schedule_store;
                pub mod schedule_store_in_memory;
            }
        }
    }
}

pub mod shell;
