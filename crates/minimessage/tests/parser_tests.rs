use component::{ClickEvent, Color, Component, Decoration, HoverEvent, NamedColor, Style};
use minimessage::{MiniMessage, MiniMessageConfig, ParseError};
use pretty_assertions::assert_eq;

fn lenient() -> MiniMessage {
    MiniMessage::new()
}

fn strict() -> MiniMessage {
    MiniMessage::with_config(MiniMessageConfig {
        strict: true,
        ..Default::default()
    })
}

fn color_runs(tree: &Component) -> Vec<(String, Option<Color>)> {
    let mut runs = Vec::new();
    tree.walk_literals(&Style::default(), &mut |text, style| {
        runs.push((text.to_string(), style.color));
    });
    runs
}

#[test]
fn nested_color_override_both_modes() {
    let input = "<green>Hello, <blue>MiniMessage</blue>!</green>";
    let green = Some(Color::Named(NamedColor::Green));
    let blue = Some(Color::Named(NamedColor::Blue));

    for mm in [lenient(), strict()] {
        let tree = mm.parse(input).unwrap();
        assert_eq!(
            color_runs(&tree),
            vec![
                ("Hello, ".to_string(), green),
                ("MiniMessage".to_string(), blue),
                ("!".to_string(), green),
            ]
        );
    }
}

#[test]
fn lenient_parsing_never_fails() {
    let nasty = [
        "",
        "<",
        "<>",
        "</",
        "</>",
        "<red",
        "<red><bold>",
        "</red>",
        "<red>a</blue>",
        "<click>",
        "<click:nope:x>y</click>",
        "<hover:show_text:'unterminated>",
        "\\",
        "\\<red>",
        "<#zzzzzz>",
        "a & b &z",
        "<<<>>>",
        "<b><i><u><st><obf>",
    ];
    for input in nasty {
        let result = lenient().parse(input);
        assert!(result.is_ok(), "lenient parse failed for {input:?}");
    }
}

#[test]
fn strict_unclosed_tag() {
    match strict().parse("<red>Unclosed tag") {
        Err(ParseError::UnclosedTag { name, position }) => {
            assert_eq!(name, "red");
            assert_eq!(position, 0);
        }
        other => panic!("unexpected result: {other:?}"),
    }

    // the same input is fine when lenient
    let tree = lenient().parse("<red>Unclosed tag").unwrap();
    let node = tree.as_node().unwrap();
    assert_eq!(node.style.color, Some(Color::Named(NamedColor::Red)));
}

#[test]
fn strict_unknown_tag_reports_position() {
    match strict().parse("abc <wiggle>") {
        Err(ParseError::UnknownTag { name, position }) => {
            assert_eq!(name, "wiggle");
            assert_eq!(position, 4);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn strict_accepts_well_formed_input() {
    let input = "<red><bold>a</bold>b</red><lang:chat.type.say:'<aqua>x</aqua>'>";
    assert!(strict().parse(input).is_ok());
}

#[test]
fn strict_mismatched_closer() {
    assert!(matches!(
        strict().parse("<red><bold>x</red>"),
        Err(ParseError::MismatchedCloser { .. })
    ));
}

#[test]
fn click_and_hover_are_opaque_payloads() {
    let tree = lenient()
        .parse("<click:open_url:'https://example.com/?a=1:2'>go</click>")
        .unwrap();
    assert_eq!(
        tree.style().unwrap().click,
        Some(ClickEvent::OpenUrl {
            url: "https://example.com/?a=1:2".to_string()
        })
    );

    let tree = lenient()
        .parse("<hover:show_item:'minecraft:stone':64>block</hover>")
        .unwrap();
    assert_eq!(
        tree.style().unwrap().hover,
        Some(HoverEvent::ShowItem {
            id: "minecraft:stone".to_string(),
            count: Some(64),
            nbt: None,
        })
    );
}

#[test]
fn hover_show_entity_with_styled_name() {
    let tree = lenient()
        .parse("<hover:show_entity:'minecraft:pig':'7e5475fd':'<gold>Piggy'>x</hover>")
        .unwrap();
    match &tree.style().unwrap().hover {
        Some(HoverEvent::ShowEntity { kind, uuid, name }) => {
            assert_eq!(kind, "minecraft:pig");
            assert_eq!(uuid, "7e5475fd");
            let name = name.as_ref().unwrap();
            assert_eq!(
                name.style().unwrap().color,
                Some(Color::Named(NamedColor::Gold))
            );
        }
        other => panic!("unexpected hover: {other:?}"),
    }
}

#[test]
fn translatable_with_styled_args() {
    let tree = lenient()
        .parse("<lang:chat.type.say:'<aqua>Steve':'hi there'>")
        .unwrap();
    match &tree.as_node().unwrap().content {
        component::Content::Translatable { key, args } => {
            assert_eq!(key, "chat.type.say");
            assert_eq!(args.len(), 2);
            assert_eq!(
                args[0].style().unwrap().color,
                Some(Color::Named(NamedColor::Aqua))
            );
            assert_eq!(args[1], Component::Text("hi there".to_string()));
        }
        other => panic!("unexpected content: {other:?}"),
    }
}

#[test]
fn selector_with_separator() {
    let tree = lenient()
        .parse("<selector:'@e[type=cow]':'<gray>, '>")
        .unwrap();
    match &tree.as_node().unwrap().content {
        component::Content::Selector { pattern, separator } => {
            assert_eq!(pattern, "@e[type=cow]");
            let sep = separator.as_ref().unwrap();
            assert_eq!(
                sep.style().unwrap().color,
                Some(Color::Named(NamedColor::Gray))
            );
        }
        other => panic!("unexpected content: {other:?}"),
    }
}

#[test]
fn decorations_fold_across_nesting() {
    let tree = lenient()
        .parse("<bold>a<italic>b</italic>c</bold>")
        .unwrap();
    let mut runs = Vec::new();
    tree.walk_literals(&Style::default(), &mut |text, style| {
        runs.push((
            text.to_string(),
            style.is_decorated(Decoration::Bold),
            style.is_decorated(Decoration::Italic),
        ));
    });
    assert_eq!(
        runs,
        vec![
            ("a".to_string(), true, false),
            ("b".to_string(), true, true),
            ("c".to_string(), true, false),
        ]
    );
}

#[test]
fn markup_is_case_insensitive() {
    let tree = lenient().parse("<RED>x</RED>").unwrap();
    assert_eq!(
        tree.style().unwrap().color,
        Some(Color::Named(NamedColor::Red))
    );
}

#[test]
fn unknown_markup_flows_through_as_text() {
    let tree = lenient().parse("look: <rainbow>wow</rainbow>").unwrap();
    assert_eq!(
        tree,
        Component::Text("look: <rainbow>wow</rainbow>".to_string())
    );
}
