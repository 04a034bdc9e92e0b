use emptycheck::empty_check;

fn main() {
    let _ = empty_check(&42u8);
}
