#![allow(dead_code)] // Shared across the integration tests; each binary uses a subset.

//! Shared fixtures: a minimal capture and a small login page, plus the
//! modified variant used by the diff scenarios.

use websketch_ir::{
    BBox01, Capture, CompilerInfo, Node, Role, TextKind, TextSig, Viewport,
};

pub fn minimal() -> Capture {
    Capture {
        version: "0.1".into(),
        url: "https://example.com".into(),
        timestamp_ms: 1_700_000_000_000.0,
        viewport: Viewport {
            w_px: 1920.0,
            h_px: 1080.0,
            aspect: 1920.0 / 1080.0,
            scroll_y01: None,
        },
        compiler: CompilerInfo {
            name: "websketch-ir".into(),
            version: "0.2.1".into(),
            options_hash: "test".into(),
        },
        root: Node::new(Role::Page, BBox01::new(0.0, 0.0, 1.0, 1.0), false, true),
    }
}

fn short_sig(len: u32, hash: &str) -> TextSig {
    TextSig {
        kind: TextKind::Short,
        len: Some(len),
        hash: Some(hash.into()),
    }
}

fn with_children(mut node: Node, children: Vec<Node>) -> Node {
    node.children = Some(children);
    node
}

/// A small but representative login page: header with brand and signup link,
/// centered login form, footer.
pub fn login_page() -> Capture {
    let mut brand = Node::new(Role::Text, BBox01::new(0.02, 0.01, 0.2, 0.05), false, true);
    brand.text = Some(short_sig(7, "brand_acme"));

    let mut signup = Node::new(Role::Link, BBox01::new(0.8, 0.02, 0.15, 0.04), true, true);
    signup.semantic = Some("signup".into());
    signup.text = Some(short_sig(7, "link_signup"));

    let header = with_children(
        Node::new(Role::Header, BBox01::new(0.0, 0.0, 1.0, 0.08), false, true),
        vec![brand, signup],
    );

    let mut heading = Node::new(Role::Text, BBox01::new(0.35, 0.28, 0.3, 0.06), false, true);
    heading.text = Some(short_sig(5, "heading_login"));

    let mut email = Node::new(Role::Input, BBox01::new(0.35, 0.38, 0.3, 0.05), true, true);
    email.semantic = Some("email".into());
    email.name_hash = Some("nh_email".into());
    email.enabled = Some(true);
    email.focusable = Some(true);

    let mut password = Node::new(Role::Input, BBox01::new(0.35, 0.45, 0.3, 0.05), true, true);
    password.semantic = Some("password".into());
    password.name_hash = Some("nh_password".into());
    password.enabled = Some(true);
    password.focusable = Some(true);

    let mut submit = Node::new(Role::Button, BBox01::new(0.35, 0.52, 0.3, 0.06), true, true);
    submit.semantic = Some("primary_cta".into());
    submit.text = Some(short_sig(7, "btn_sign_in"));
    submit.enabled = Some(true);

    let mut form = Node::new(Role::Form, BBox01::new(0.3, 0.25, 0.4, 0.4), false, true);
    form.semantic = Some("login".into());
    let form = with_children(form, vec![heading, email, password, submit]);

    let mut copy = Node::new(Role::Text, BBox01::new(0.4, 0.93, 0.2, 0.04), false, true);
    copy.text = Some(short_sig(12, "footer_copy"));
    let footer = with_children(
        Node::new(Role::Footer, BBox01::new(0.0, 0.9, 1.0, 0.1), false, true),
        vec![copy],
    );

    let mut cap = minimal();
    cap.url = "https://example.com/login".into();
    cap.root = with_children(cap.root, vec![header, form, footer]);
    cap
}

/// [`login_page`] after a deploy: new heading copy, the submit button pushed
/// down 5% of the viewport, and a toast in the top-right corner.
pub fn login_page_modified() -> Capture {
    let mut cap = login_page();
    let root_children = cap.root.children.as_mut().unwrap();

    let form_children = root_children[1].children.as_mut().unwrap();
    form_children[0].text = Some(short_sig(7, "heading_welcome"));
    form_children[3].bbox = BBox01::new(0.35, 0.57, 0.3, 0.06);

    let mut toast = Node::new(Role::Toast, BBox01::new(0.7, 0.05, 0.25, 0.06), false, true);
    toast.z = Some(9);
    toast.text = Some(short_sig(10, "toast_saved"));
    root_children.push(toast);

    cap
}
