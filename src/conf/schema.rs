//! The isubo configuration schema: five sections in a fixed order, each
//! field carrying its help-text block and compiled-in default. The help
//! text is part of the emitted file contract and is carried verbatim.

use crate::conf::template::{Back2Top, ConfTemplate, ConfValue, Field, Section, SourceStatement, Toc};

pub const SECTION_GITHUB_INFO: &str = "githubInfo";
pub const SECTION_POST_SOURCE: &str = "postSource";
pub const SECTION_LINK_FORMAT: &str = "linkFormat";
pub const SECTION_ASSETS_PUSH: &str = "assetsPush";
pub const SECTION_ENHANCE: &str = "enhance";

pub const FIELD_OWNER: &str = "owner";
pub const FIELD_REPO: &str = "repo";
pub const FIELD_BRANCH: &str = "branch";
pub const FIELD_TOKEN: &str = "token";
pub const FIELD_SOURCE_DIR: &str = "source_dir";
pub const FIELD_LINK_PREFIX: &str = "link_prefix";

pub const DEF_BRANCH: &str = "main";
pub const DEF_SOURCE_DIR: &str = "source/";

const OWNER_DESC: &str = r#"
## [required]
## Repository owner, Such as "isaaxite" in "isaaxite/blog".
# e.g.
# owner: isaaxite
"#;

const REPO_DESC: &str = r#"
## [required]
## Repository name, refer to "blog" in the example above.
### Please ensure that this repository has been manually created by you,
### it will be used to store posts resources, and posts will also be published to this repository's issue.
# e.g.
# repo: blog
"#;

const BRANCH_DESC: &str = r#"
## [optional]
## Branch of <owner>/<repo>, the branch where the resource is actually stored.
## Default 'main'
## branch: main
"#;

const TOKEN_DESC: &str = r#"
## [required]
## Github Token, it will be used to invoked github api to publish posts
## you can get it in https://github.com/settings/tokens
## It is strongly recommended not to use plaintext to prevent others from stealing your token.
## You can try to use environment variables.
## If you use an environment variable, please start with $ and use uppercase letters for the remaining part to declare,
## and isubo will automatically obtain this environment variable
# e.g.
# token: $GITHUB_TOKEN
"#;

const SOURCE_DIR_DESC: &str = r#"
## [optional]
## Source dir, The top-level directory where articles are stored, and where isubo should looking for.
## Default "source/"
## e.g.
## source_dir: "source/"
"#;

const LINK_PREFIX_DESC: &str = r#"
## [optional]
## Used to format links in articles, and format relative links as url links
## it can take a string or plain object, as the blew example
##
## string:
##  link_prefix: https://raw.githubusercontent.com/<owner>/<repo>/<branch>/<source_dir>/
##
## object:
##  link_prefix:
##    owner: <owner>, default is global owner
##    repo: <repo>, default is global repo
##    branch: <branch>, default is global branch
##    dir: '<dir>', default is global source_dir
##
## Default:
##  link_prefix: https://raw.githubusercontent.com/<owner>/<repo>/<branch>/<source_dir>/
"#;

const TYPES_DESC: &str = r#"
## [optional]
## types, Which link type should be formated.
## According to the type specified by types, format the corresponding non-http path.
## Currently supports two formats of "image" and "link", the default is only "image" format.
# types:
#   - image
"#;

const PUSH_ASSET_DESC: &str = r#"
## [optional]
## Setting this configuration that will detect link assets of those posts and judge which assets need to push when you published the posts.
## If there are some assets need to push and this configuration'value is 'prompt' or 'auto', isubo will use git-lib to push them.
## Hint: You can use this feature with confidence, because we will temporary storage those changes other than assets,
## and recover them after pushed assets successfuly, in case we also set up a temporary branch as the last resort.
##
## push_asset: prompt | auto | disable
##   prompt: prompt to if push assets
##   auto: push assets automatically
##   disable: just disable pushing assets
## Default setting is 'prompt'.
"#;

const HIDE_FRONTMATTER_DESC: &str = r#"
## [optional]
## In Isubo, the post support yml metadata like the below. By default, the published issue will delete this part of metadata.
## If you want to show that, you should set 'hide_frontmatter: false'.
## Default: true
"#;

const POST_TITLE_SEAT_DESC: &str = r#"
## [optional]
## Isubo use directory name or filename at post path as post title
## By default, filename is used as the title of the post
## You can set it with 'post_title_seat'
## e.g.
## /home/issue-blog/source/license.md
## 0: license
## 1: source
## 2: isubo-blog
"#;

const SOURCE_STATEMENT_DESC: &str = r#"
## [optional]
## Inserting a statement at the top of the post.
## By default, it is disable. If you want to use it, you can refer to the following example:
# source_statement:
#  enable: [boolean], default=false
#  content: Array<string>, a list of string, default=[]
"#;

const BACK2TOP_DESC: &str = r#"
## [optional]
## Insert a "back-to-top" button at the bottom of a paragraph.
## back2top:
##  enable: [boolean], default=true
##  text: [string], text of 'back-to-top' buttion, default='⬆ back to top'
##  link: [string], link of the buttion, default='#'
##  insert_deep: [number], the max inserting depth of paragraph(#=1,##=2), default=3
# back2top:
#   enable: true
#   text: ⬆ back to top
#   link: '#'
#   insert_deep: 3
"#;

const TOC_DESC: &str = r#"
## [optional]
## Insert table-of-content based on the content at the top of the post.
## toc:
##  enable: [boolean], default=true
##  title: [string], text of table-of-content, default='Table Of Content'
##  depth: [number], the maximum depth of generated toc, default=3
##  bullets: [string], the flag of list item, '-' | '*', default='-'
# toc:
#   enable: true
#   title: Table Of Content
#   depth: 3
#   bullets: '-'
"#;

pub fn default_template() -> ConfTemplate {
    ConfTemplate {
        sections: vec![
            Section {
                key: SECTION_GITHUB_INFO,
                name: "Github Info",
                fields: vec![
                    Field::new(FIELD_OWNER, OWNER_DESC, ConfValue::str("")),
                    Field::new(FIELD_REPO, REPO_DESC, ConfValue::str("")),
                    Field::new(FIELD_BRANCH, BRANCH_DESC, ConfValue::str(DEF_BRANCH)),
                    Field::new(FIELD_TOKEN, TOKEN_DESC, ConfValue::str("")),
                ],
            },
            Section {
                key: SECTION_POST_SOURCE,
                name: "Post Source",
                fields: vec![Field::new(
                    FIELD_SOURCE_DIR,
                    SOURCE_DIR_DESC,
                    ConfValue::str(DEF_SOURCE_DIR),
                )],
            },
            Section {
                key: SECTION_LINK_FORMAT,
                name: "Link Format",
                fields: vec![
                    Field::new(FIELD_LINK_PREFIX, LINK_PREFIX_DESC, ConfValue::str("")),
                    Field::new(
                        "types",
                        TYPES_DESC,
                        ConfValue::List(vec!["image".to_string()]),
                    ),
                ],
            },
            Section {
                key: SECTION_ASSETS_PUSH,
                name: "Assets Push",
                fields: vec![
                    Field::new("push_asset", PUSH_ASSET_DESC, ConfValue::str("prompt")),
                    Field::new("hide_frontmatter", HIDE_FRONTMATTER_DESC, ConfValue::Bool(true)),
                    Field::new("post_title_seat", POST_TITLE_SEAT_DESC, ConfValue::Int(0)),
                ],
            },
            Section {
                key: SECTION_ENHANCE,
                name: "Enhance",
                fields: vec![
                    Field::new(
                        "source_statement",
                        SOURCE_STATEMENT_DESC,
                        ConfValue::SourceStatement(SourceStatement {
                            enable: false,
                            content: Vec::new(),
                        }),
                    ),
                    Field::new(
                        "back2top",
                        BACK2TOP_DESC,
                        ConfValue::Back2Top(Back2Top {
                            enable: true,
                            text: "⬆ back to top".to_string(),
                            link: "#".to_string(),
                            insert_deep: 3,
                        }),
                    ),
                    Field::new(
                        "toc",
                        TOC_DESC,
                        ConfValue::Toc(Toc {
                            enable: true,
                            title: "Table Of Content".to_string(),
                            depth: 3,
                            bullets: "-".to_string(),
                        }),
                    ),
                ],
            },
        ],
    }
}
