pub mod application {
    pub mod catalog {
        pub mod load;
    }
    pub mod product {
        pub mod resolve;
    }
}

pub mod domain {
    pub mod logger;
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod source;
        pub mod use_cases {
            pub mod load;
        }
    }
    pub mod matching {
        pub mod distance;
        pub mod model;
        pub mod normalize;
        pub mod resolver;
    }
    pub mod product {
        pub mod model;
        pub mod use_cases {
            pub mod resolve;
        }
    }
}
