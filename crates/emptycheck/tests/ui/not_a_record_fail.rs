use emptycheck::EmptyCheck;

#[derive(EmptyCheck)]
enum Status {
    Draft,
}

#[derive(EmptyCheck)]
struct Millis(u64);

fn main() {}
