use component::{
    ClickEvent, Color, Component, Decoration, HoverEvent, NamedColor, Style,
};
use pretty_assertions::assert_eq;

fn named(color: NamedColor) -> Option<Color> {
    Some(Color::Named(color))
}

#[test]
fn effective_style_folds_root_to_leaf() {
    let tree = Component::text("a")
        .color(named(NamedColor::Red))
        .append(
            Component::text("b")
                .decoration(Decoration::Italic, Some(true))
                .append(Component::text("c").color(named(NamedColor::Blue))),
        );

    let mut leaves = Vec::new();
    tree.walk_literals(&Style::default(), &mut |text, style| {
        leaves.push((text.to_string(), style.clone()));
    });

    assert_eq!(leaves.len(), 3);

    let (_, a) = &leaves[0];
    assert_eq!(a.color, named(NamedColor::Red));
    assert!(!a.is_decorated(Decoration::Italic));

    let (_, b) = &leaves[1];
    assert_eq!(b.color, named(NamedColor::Red));
    assert!(b.is_decorated(Decoration::Italic));

    let (_, c) = &leaves[2];
    assert_eq!(c.color, named(NamedColor::Blue));
    assert!(c.is_decorated(Decoration::Italic));
}

#[test]
fn events_apply_only_to_their_own_node() {
    let click = ClickEvent::OpenUrl {
        url: "https://example.com".to_string(),
    };
    let tree = Component::text("link")
        .click(Some(click.clone()))
        .append(Component::text("plain child"));

    let mut leaves = Vec::new();
    tree.walk_literals(&Style::default(), &mut |text, style| {
        leaves.push((text.to_string(), style.click.clone()));
    });

    assert_eq!(leaves[0], ("link".to_string(), Some(click)));
    assert_eq!(leaves[1], ("plain child".to_string(), None));
}

#[test]
fn hover_holds_a_nested_component() {
    let tooltip = Component::text("details").color(named(NamedColor::Gray));
    let comp = Component::text("item").hover(Some(HoverEvent::ShowText {
        value: tooltip.clone(),
    }));

    match &comp.style().unwrap().hover {
        Some(HoverEvent::ShowText { value }) => assert_eq!(value, &tooltip),
        other => panic!("unexpected hover: {other:?}"),
    }
}

#[test]
fn modification_is_non_destructive() {
    let base = Component::text("shared");
    let red = base.clone().color(named(NamedColor::Red));

    // the original is untouched
    assert!(!base.has_styling());
    assert!(red.has_styling());
}

#[test]
fn root_parent_is_identity() {
    let plain = Component::from("just text");
    let mut styles = Vec::new();
    plain.walk_literals(&Style::default(), &mut |_, style| {
        styles.push(style.clone());
    });
    assert_eq!(styles, vec![Style::default()]);
}
