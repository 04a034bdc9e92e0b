use emptycheck::{EmptyCheck, EmptyCheckExt, Inspect, Record};

#[derive(EmptyCheck)]
struct Address<'a> {
    street: &'a str,
    number: u16,
}

#[derive(EmptyCheck)]
struct Customer<'a, T> {
    name: String,
    addresses: Vec<Address<'a>>,
    extra: Option<T>,
    #[emptycheck(not_required)]
    cache: std::cell::Cell<u8>,
}

fn assert_record<R: Record + Inspect>(_: &R) {}

fn main() {
    let customer: Customer<'_, u8> = Customer {
        name: "Ada".to_owned(),
        addresses: vec![Address { street: "Main", number: 1 }],
        extra: None,
        cache: std::cell::Cell::new(0),
    };
    assert_record(&customer);
    assert!(customer.empty_check().is_err());
}
