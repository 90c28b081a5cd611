use isubo_init::conf::{
    conf_slim, default_template, link_prefix_default, render_conf, HEADER,
};

#[test]
fn rendered_file_separates_header_and_chapters_with_blank_lines() {
    let body = render_conf(&default_template()).expect("render");
    assert!(body.starts_with(&format!("{HEADER}\n\n# Github Info\n")));
    assert!(body.contains("\n\n# Post Source\n"));
    assert!(body.contains("\n\n# Enhance\n"));
}

#[test]
fn every_assignment_is_preceded_by_its_help_block() {
    let mut conf = default_template();
    conf.set_str("githubInfo", "owner", "acme").expect("owner");
    let body = render_conf(&conf).expect("render");

    // The help block's closing example line sits right above the value.
    assert!(body.contains("# owner: isaaxite\nowner: acme\n"));
    assert!(body.contains("## Default 'main'\n## branch: main\nbranch: main\n"));
}

#[test]
fn slim_projection_mirrors_schema_order_for_all_sections() {
    let conf = default_template();
    let slim = conf_slim(&conf).expect("slim");
    let declared: Vec<&str> = conf.sections.iter().map(|s| s.key).collect();
    let projected: Vec<&str> = slim.keys().map(|k| k.as_str().expect("str key")).collect();
    assert_eq!(declared, projected);

    for section in &conf.sections {
        let fields = slim
            .get(section.key)
            .and_then(|v| v.as_mapping())
            .expect("section mapping");
        let declared: Vec<&str> = section.fields.iter().map(|f| f.key).collect();
        let projected: Vec<&str> = fields.keys().map(|k| k.as_str().expect("str key")).collect();
        assert_eq!(declared, projected, "field order diverged in `{}`", section.key);
    }
}

#[test]
fn link_prefix_default_matches_the_documented_interpolation() {
    assert_eq!(
        link_prefix_default("acme", "blog", "main", "posts/"),
        "https://raw.githubusercontent.com/acme/blog/main/posts/"
    );
}
