pub mod application {
    pub mod category {
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod insert;
        pub mod update;
    }
    pub mod product {
        pub mod categories;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod insert;
        pub mod update;
    }
    pub mod user {
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod insert;
        pub mod roles;
        pub mod update;
        pub mod validate;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod pagination;
        pub mod validation;
    }
    pub mod category {
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod insert;
            pub mod update;
        }
    }
    pub mod product {
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod insert;
            pub mod update;
        }
    }
    pub mod role {
        pub mod model;
        pub mod repository;
    }
    pub mod user {
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod insert;
            pub mod update;
            pub mod validate;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
