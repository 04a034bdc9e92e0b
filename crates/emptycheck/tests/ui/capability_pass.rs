mod reexport {
    pub use emptycheck as check;
}

use reexport::check::{EmptyCheck, Emptiable, Zeroable};

#[derive(EmptyCheck)]
#[emptycheck(crate = "reexport::check", emptiable)]
enum Status {
    Draft,
    Published(u32),
}

impl Emptiable for Status {
    fn is_empty(&self) -> bool {
        matches!(self, Self::Draft)
    }
}

#[derive(EmptyCheck)]
#[emptycheck(zeroable)]
struct Millis(u64);

impl Zeroable for Millis {
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

#[derive(EmptyCheck)]
#[emptycheck(emptiable, zeroable)]
struct Unit;

impl Emptiable for Unit {
    fn is_empty(&self) -> bool {
        true
    }
}

impl Zeroable for Unit {
    fn is_zero(&self) -> bool {
        false
    }
}

fn main() {
    assert!(emptycheck::is_empty(&Status::Draft));
    assert!(!emptycheck::is_empty(&Status::Published(1)));
    assert!(emptycheck::is_empty(&Millis(0)));
    assert!(emptycheck::is_empty(&Unit));
}
