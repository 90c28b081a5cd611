pub mod emit;
pub mod error;
pub mod schema;
pub mod slim;
pub mod template;

pub use emit::{render_conf, write_conf, CONF_FILE_NAME, HEADER};
pub use error::ConfError;
pub use schema::{
    default_template, DEF_BRANCH, DEF_SOURCE_DIR, FIELD_BRANCH, FIELD_LINK_PREFIX, FIELD_OWNER,
    FIELD_REPO, FIELD_SOURCE_DIR, FIELD_TOKEN, SECTION_ASSETS_PUSH, SECTION_ENHANCE,
    SECTION_GITHUB_INFO, SECTION_LINK_FORMAT, SECTION_POST_SOURCE,
};
pub use slim::conf_slim;
pub use template::{
    link_prefix_default, normalize_desc, Back2Top, ConfTemplate, ConfValue, Field, Section,
    SourceStatement, Toc,
};
