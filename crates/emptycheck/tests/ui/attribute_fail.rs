use emptycheck::EmptyCheck;

#[derive(EmptyCheck)]
struct Form {
    #[emptycheck(no_required)]
    note: String,
}

#[derive(EmptyCheck)]
#[emptycheck = "emptiable"]
struct Stamp(u64);

fn main() {}
