//! Tests for display-mode dispatch

use super::*;
use relview_core::Value;

fn sample() -> Vec<Relation> {
    vec![
        Relation::new("/:output/:b/Int64", vec![vec![Value::Int(2)]]).unwrap(),
        Relation::new("/:output/:a/Int64", vec![vec![Value::Int(1)]]).unwrap(),
    ]
}

#[test]
fn test_each_mode_dispatches_to_its_transform() {
    let relations = sample();
    for mode in DisplayMode::ALL {
        let rendered = render(&relations, mode, PartitionLayout::Horizontal);
        assert_eq!(rendered.mode(), mode);
    }

    let RenderedOutput::Physical(tables) = render(&relations, DisplayMode::Physical, PartitionLayout::Horizontal)
    else {
        panic!("expected physical output");
    };
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].title, "/:output/:a/Int64");
}

#[test]
fn test_render_output_separates_diagnostics() {
    let mut relations = sample();
    relations.push(
        Relation::new(
            "/:rel/:catalog/:diagnostic/:code/Int64/String",
            vec![vec![Value::Int(1)], vec![Value::String("UNDEFINED".into())]],
        )
        .unwrap(),
    );

    let output = render_output(&relations, &RenderOptions::default());
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].code, "UNDEFINED");

    let Content::Tables(RenderedOutput::Logical(tables)) = output.content else {
        panic!("expected logical tables");
    };
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].title, ":output");
}

#[test]
fn test_render_output_prefers_document_mime() {
    let relations = vec![
        Relation::new("/:output/:mime/String", vec![vec![Value::String("text/plain".into())]]).unwrap(),
        Relation::new("/:output/String", vec![vec![Value::String("hello".into())]]).unwrap(),
    ];
    let output = render_output(&relations, &RenderOptions::default().with_mode(DisplayMode::Raw));
    assert_eq!(
        output.content,
        Content::Document {
            document: MimeOutput::Text {
                text: "hello".to_string()
            },
            tables: None,
        }
    );
}

#[test]
fn test_document_keeps_other_names_as_tables() {
    let relations = vec![
        Relation::new("/:output/:mime/String", vec![vec![Value::String("text/markdown".into())]]).unwrap(),
        Relation::new("/:output/String", vec![vec![Value::String("# Report".into())]]).unwrap(),
        Relation::new("/:totals/Int64", vec![vec![Value::Int(42)]]).unwrap(),
    ];
    let output = render_output(&relations, &RenderOptions::default());

    let Content::Document { document, tables } = output.content else {
        panic!("expected a document");
    };
    assert_eq!(
        document,
        MimeOutput::Markdown {
            text: "# Report".to_string()
        }
    );
    let Some(RenderedOutput::Logical(tables)) = tables else {
        panic!("expected logical companion tables");
    };
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].title, ":totals");
}

#[test]
fn test_serialized_shape() {
    let output = render(&sample(), DisplayMode::Logical, PartitionLayout::Horizontal);
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["mode"], "logical");
    assert_eq!(json["data"][0]["title"], ":output");
    assert_eq!(json["data"][0]["rows"][0][0]["text"], ":a");
}
