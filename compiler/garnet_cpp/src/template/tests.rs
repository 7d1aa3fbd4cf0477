use super::*;
use pretty_assertions::assert_eq;

const TEMPLATE: &str = "\
#include \"garnet.hpp\"

/*GARNET_DECLARATIONS*/

Value init_obj(Env *env, Value self) {
/*GARNET_OBJ_INIT*/
return NilObject::the();
}

int main() {
/*GARNET_EVAL_INIT*/
/*GARNET_EVAL_BODY*/
}
";

fn sections() -> TemplateSections<'static> {
    TemplateSections {
        declarations: "DECLS",
        object_init: "OBJ",
        eval_init: "BOOT",
        eval_body: "BODY",
    }
}

#[test]
fn test_merge_replaces_every_marker() {
    let template = RuntimeTemplate::parse(TEMPLATE).unwrap();
    let merged = template.merge(&sections());
    assert_eq!(
        merged,
        "\
#include \"garnet.hpp\"

DECLS

Value init_obj(Env *env, Value self) {
OBJ
return NilObject::the();
}

int main() {
BOOT
BODY
}
"
    );
    for marker in Marker::ALL {
        assert!(!merged.contains(marker.token()));
    }
}

#[test]
fn test_markers_in_any_order() {
    let text = "/*GARNET_EVAL_BODY*/|/*GARNET_OBJ_INIT*/|/*GARNET_DECLARATIONS*/|/*GARNET_EVAL_INIT*/";
    let template = RuntimeTemplate::parse(text).unwrap();
    assert_eq!(template.merge(&sections()), "BODY|OBJ|DECLS|BOOT");
}

#[test]
fn test_generated_text_is_not_rescanned() {
    let template = RuntimeTemplate::parse(TEMPLATE).unwrap();
    let merged = template.merge(&TemplateSections {
        declarations: "/*GARNET_EVAL_BODY*/",
        ..sections()
    });
    assert_eq!(merged.matches("/*GARNET_EVAL_BODY*/").count(), 1);
    assert!(merged.contains("BODY\n}"));
}

#[test]
fn test_missing_marker() {
    let text = TEMPLATE.replace("/*GARNET_OBJ_INIT*/", "");
    assert_eq!(
        RuntimeTemplate::parse(&text).unwrap_err(),
        TemplateError::MissingMarker(Marker::ObjectInit)
    );
}

#[test]
fn test_duplicate_marker() {
    let text = format!("{TEMPLATE}/*GARNET_EVAL_INIT*/\n/*GARNET_EVAL_INIT*/\n");
    assert_eq!(
        RuntimeTemplate::parse(&text).unwrap_err(),
        TemplateError::DuplicateMarker {
            marker: Marker::EvalInit,
            count: 3,
        }
    );
}

#[test]
fn test_self_overlapping_duplicate_marker() {
    let text = "/*GARNET_DECLARATIONS*/ /*GARNET_OBJ_INIT*/ /*GARNET_EVAL_INIT*/ \
                /*GARNET_EVAL_BODY*/*GARNET_EVAL_BODY*/";
    assert_eq!(
        RuntimeTemplate::parse(text).unwrap_err(),
        TemplateError::DuplicateMarker {
            marker: Marker::EvalBody,
            count: 2,
        }
    );
}

#[test]
fn test_occurrences_include_overlaps() {
    let found: Vec<usize> = occurrences("aaaa", "aa").collect();
    assert_eq!(found, [0, 1, 2]);
    assert_eq!(occurrences("no marker here", "/*X*/").count(), 0);
}

#[test]
fn test_overlapping_markers() {
    let text = "/*GARNET_DECLARATIONS*/ /*GARNET_OBJ_INIT*/*GARNET_EVAL_INIT*/ /*GARNET_EVAL_BODY*/";
    assert_eq!(
        RuntimeTemplate::parse(text).unwrap_err(),
        TemplateError::OverlappingMarkers {
            first: Marker::ObjectInit,
            second: Marker::EvalInit,
        }
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        TemplateError::MissingMarker(Marker::EvalBody).to_string(),
        "marker `/*GARNET_EVAL_BODY*/` not found"
    );
    assert_eq!(
        TemplateError::DuplicateMarker {
            marker: Marker::Declarations,
            count: 2
        }
        .to_string(),
        "marker `/*GARNET_DECLARATIONS*/` appears 2 times, expected exactly once"
    );
}
