use emptycheck::EmptyCheck;

struct Blob;

#[derive(EmptyCheck)]
struct Upload {
    blob: Blob,
}

fn main() {}
