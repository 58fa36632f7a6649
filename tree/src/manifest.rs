use serde::{Deserialize, Serialize};

use crate::{Composite, Leaf, Name, Node};

/// A declarative description of a tree, dispatching on its `type` field.
///
/// ```json
/// {
///   "type": "composite",
///   "name": "firstDirectory",
///   "children": [{ "type": "leaf", "name": "secondFile" }]
/// }
/// ```
///
/// Names are validated during deserialization, so every manifest can be
/// turned into a [Node].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Manifest {
    Leaf {
        name: Name,
    },
    Composite {
        name: Name,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<Manifest>,
    },
}

impl From<Manifest> for Node {
    fn from(value: Manifest) -> Self {
        match value {
            Manifest::Leaf { name } => Leaf::from(name).into(),
            Manifest::Composite { name, children } => {
                let mut composite = Composite::from(name);
                composite.set_children(children.into_iter().map(Node::from));
                composite.into()
            }
        }
    }
}

impl From<&Node> for Manifest {
    fn from(value: &Node) -> Self {
        match value {
            Node::Leaf(leaf) => Manifest::Leaf {
                name: leaf.name().clone(),
            },
            Node::Composite(composite) => Manifest::Composite {
                name: composite.name().clone(),
                children: composite.children().map(Manifest::from).collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use crate::{fixtures::FIRST_DIRECTORY, Node};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn parse_first_directory() {
        let manifest: Manifest = serde_json::from_str(
            r#"{
                "type": "composite",
                "name": "firstDirectory",
                "children": [
                    { "type": "leaf", "name": "secondFile" },
                    { "type": "leaf", "name": "thirdFile" },
                    { "type": "composite", "name": "2ndDirectory" }
                ]
            }"#,
        )
        .expect("must parse");

        assert_eq!(*FIRST_DIRECTORY, Node::from(manifest));
    }

    #[test]
    fn serialize_omits_empty_children() {
        let manifest = Manifest::from(&*FIRST_DIRECTORY);
        assert_eq!(
            serde_json::json!({
                "type": "composite",
                "name": "firstDirectory",
                "children": [
                    { "type": "leaf", "name": "secondFile" },
                    { "type": "leaf", "name": "thirdFile" },
                    { "type": "composite", "name": "2ndDirectory" }
                ]
            }),
            serde_json::to_value(&manifest).unwrap()
        );
    }

    #[rstest]
    #[case::empty_name(r#"{ "type": "leaf", "name": "" }"#, "name must not be empty")]
    #[case::line_break(
        r#"{ "type": "composite", "name": "a", "children": [{ "type": "leaf", "name": "b\nc" }] }"#,
        "must not contain line breaks"
    )]
    #[case::unknown_type(r#"{ "type": "symlink", "name": "a" }"#, "unknown variant")]
    #[case::missing_name(r#"{ "type": "leaf" }"#, "missing field `name`")]
    fn reject(#[case] input: &str, #[case] message: &str) {
        let err = serde_json::from_str::<Manifest>(input).expect_err("must fail");
        assert!(
            err.to_string().contains(message),
            "{} does not mention {}",
            err,
            message
        );
    }
}
