pub mod modules {
    pub mod voters {
        pub mod core {
            pub mod poll_history;
            pub mod voter;
        }
        pub mod use_cases {
            pub mod manage_voters {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod manage_voter_polls {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod report_health {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod api_error;
                pub mod graphql_types;
            }
            pub mod outbound {
                pub mod voter_store;
                pub mod voter_store_in_memory;
            }
        }
    }
}

pub mod shell;
