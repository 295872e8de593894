// Crate entry point. Declares modules only, no business logic here.

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod employee_profile;
            pub mod entry;
            pub mod ports;
            pub mod time_of_day;
            pub mod timesheet;
            pub mod verdict;
        }
        pub mod use_cases {
            pub mod validate_time_entry {
                pub mod command;
                pub mod handler;
                pub mod validate;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod employee_profiles_in_memory;
                pub mod timesheets_in_memory;
            }
        }
    }
}

pub mod shell;
