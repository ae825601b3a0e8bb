// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod log_storage_datasource;
        pub(crate) mod upload_file_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod config_model;
        pub(crate) mod shopping_log_model;
        pub(crate) mod unvalidated_log_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod log_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod document;
        pub(crate) mod field;
        pub(crate) mod form_session;
        pub(crate) mod log_config;
        pub(crate) mod removal_state;
        pub(crate) mod shopping_item;
        pub(crate) mod shopping_log;
    }
    pub(crate) mod logic {
        pub(crate) mod clock;
        pub(crate) mod draft_validator;
        pub(crate) mod field_validator;
        pub(crate) mod sanitizer;
        pub(crate) mod save_debounce;
    }
    pub(crate) mod repositories {
        pub(crate) mod log_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod log_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod csv_table_renderer;
    pub(crate) mod document_builder;
    pub(crate) mod text_table_renderer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::document::*;
        pub use crate::domain::entities::field::*;
        pub use crate::domain::entities::form_session::*;
        pub use crate::domain::entities::log_config::*;
        pub use crate::domain::entities::removal_state::*;
        pub use crate::domain::entities::shopping_item::*;
        pub use crate::domain::entities::shopping_log::*;
    }

    pub mod validation {
        pub use crate::domain::logic::field_validator::validate;
    }

    pub mod storage {
        pub use crate::data::datasources::log_storage_datasource::*;
    }

    pub mod collaborators {
        pub use crate::domain::logic::clock::*;
        pub use crate::domain::logic::sanitizer::{AmmoniaSanitizer, Sanitizer};
        pub use crate::presentation::csv_table_renderer::CsvTableRenderer;
        pub use crate::presentation::text_table_renderer::TextTableRenderer;
    }
}
