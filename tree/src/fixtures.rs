use crate::{Composite, Leaf, Node};
use lazy_static::lazy_static;

fn leaf(name: &str) -> Leaf {
    Leaf::new(name).expect("invalid fixture name")
}

fn composite(name: &str) -> Composite {
    Composite::new(name).expect("invalid fixture name")
}

lazy_static! {
    pub static ref FIRST_FILE: Node = leaf("firstFile").into();

    pub static ref SECOND_DIRECTORY: Node = composite("2ndDirectory").into();

    // firstDirectory
    // ├── secondFile
    // ├── thirdFile
    // └── 2ndDirectory (empty)
    pub static ref FIRST_DIRECTORY: Node = composite("firstDirectory")
        .with_child(leaf("secondFile"))
        .with_child(leaf("thirdFile"))
        .with_child(SECOND_DIRECTORY.clone())
        .into();

    // root
    // ├── docs
    // │   ├── readme
    // │   └── drafts (empty)
    // ├── notes
    // └── src
    //     ├── main
    //     └── lib
    pub static ref NESTED_DIRECTORY: Node = composite("root")
        .with_child(
            composite("docs")
                .with_child(leaf("readme"))
                .with_child(composite("drafts")),
        )
        .with_child(leaf("notes"))
        .with_child(
            composite("src")
                .with_child(leaf("main"))
                .with_child(leaf("lib")),
        )
        .into();
}
