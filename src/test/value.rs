use crate::{ByteArray, Compound, IntArray, LongArray, NbtList, Tag, Value};

#[test]
fn value_kinds() {
    assert_eq!(Tag::Byte, Value::Byte(0).tag());
    assert_eq!(Tag::Short, Value::Short(0).tag());
    assert_eq!(Tag::Int, Value::Int(0).tag());
    assert_eq!(Tag::Long, Value::Long(0).tag());
    assert_eq!(Tag::Float, Value::Float(0.0).tag());
    assert_eq!(Tag::Double, Value::Double(0.0).tag());
    assert_eq!(Tag::String, Value::String(String::new()).tag());
    assert_eq!(Tag::ByteArray, Value::ByteArray(ByteArray::new(vec![])).tag());
    assert_eq!(Tag::IntArray, Value::IntArray(IntArray::new(vec![])).tag());
    assert_eq!(Tag::LongArray, Value::LongArray(LongArray::new(vec![])).tag());
    assert_eq!(Tag::List, Value::List(NbtList::new(Tag::End)).tag());
    assert_eq!(Tag::Compound, Value::Compound(Compound::new()).tag());
}

#[test]
fn tag_ids_are_stable() {
    let ids = [
        (0u8, Tag::End),
        (1, Tag::Byte),
        (2, Tag::Short),
        (3, Tag::Int),
        (4, Tag::Long),
        (5, Tag::Float),
        (6, Tag::Double),
        (7, Tag::ByteArray),
        (8, Tag::String),
        (9, Tag::List),
        (10, Tag::Compound),
        (11, Tag::IntArray),
        (12, Tag::LongArray),
    ];
    for (id, tag) in ids {
        assert_eq!(id, u8::from(tag));
        assert_eq!(Ok(tag), Tag::try_from(id));
    }
    assert!(Tag::try_from(13).is_err());
    assert!(Tag::try_from(255).is_err());
}

#[test]
fn conversions() {
    assert_eq!(Value::Byte(1), Value::from(true));
    assert_eq!(Value::Byte(-56), Value::from(200u8));
    assert_eq!(Value::Short(-1), Value::from(u16::MAX));
    assert_eq!(Value::String("hi".to_string()), Value::from("hi"));
    assert_eq!(Value::Float(2.5), Value::from(2.5f32));
    assert_eq!(Value::Long(-9), Value::from(-9i64));
}

#[test]
fn numeric_accessors() {
    assert_eq!(Some(3), Value::Short(3).as_i64());
    assert_eq!(None, Value::String("x".into()).as_i64());
    assert_eq!(Some(7), Value::Byte(7).as_u64());
    assert_eq!(Some(0.5), Value::Double(0.5).as_f64());
    assert_eq!(Some("x"), Value::String("x".into()).as_str());
    assert_eq!(None, Value::Int(1).as_str());
}

#[test]
fn compound_basics() {
    let mut c = Compound::new();
    assert!(c.is_empty());

    assert_eq!(None, c.insert("a", 1));
    assert_eq!(Some(&Value::Int(1)), c.get("a"));
    assert!(c.contains_key("a"));

    // Replacement hands back the old member.
    assert_eq!(Some(Value::Int(1)), c.insert("a", 2));
    assert_eq!(1, c.len());

    assert_eq!(Some(Value::Int(2)), c.remove("a"));
    assert_eq!(None, c.get("a"));
}

#[test]
fn compound_from_iter_keeps_order() {
    let c: Compound = [("one", 1), ("two", 2), ("three", 3)].into_iter().collect();
    let names: Vec<_> = c.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(vec!["one", "two", "three"], names);
}

#[test]
fn list_keeps_declared_tag() {
    let mut list = NbtList::new(Tag::Short);
    assert_eq!(Tag::Short, list.element_tag());
    assert!(list.is_empty());

    list.push(4i16).unwrap();
    list.push(5i16).unwrap();
    assert_eq!(2, list.len());
    assert_eq!(
        vec![&Value::Short(4), &Value::Short(5)],
        list.iter().collect::<Vec<_>>()
    );
}
