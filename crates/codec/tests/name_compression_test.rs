use dnswire_codec::name::read_name;
use dnswire_codec::{decode, decode_with_limit};
use dnswire_domain::{CodecError, Name};

mod helpers;
use helpers::{WireBuilder, CLASS_IN, TYPE_A};

fn name(s: &str) -> Name {
    s.parse().unwrap()
}

#[test]
fn test_pointer_resolves_to_same_labels_as_inline() {
    let builder = WireBuilder::new().header(1, 0, 2, 0, 0, 0);
    let first = builder.offset();
    let buf = builder
        .name(&["a", "b"])
        .u16(TYPE_A)
        .u16(CLASS_IN)
        .pointer(first)
        .u16(TYPE_A)
        .u16(CLASS_IN)
        .build();

    let message = decode(&buf).unwrap();

    assert_eq!(message.questions[0].name, name("a.b"));
    assert_eq!(message.questions[1].name, message.questions[0].name);
}

#[test]
fn test_labels_then_pointer_to_suffix() {
    let builder = WireBuilder::new().header(1, 0, 2, 0, 0, 0);
    let suffix = builder.offset() + 8; // "example" label, then "com"
    let buf = builder
        .name(&["example", "com"])
        .u16(TYPE_A)
        .u16(CLASS_IN)
        .name_then_pointer(&["mail"], suffix)
        .u16(TYPE_A)
        .u16(CLASS_IN)
        .build();

    let message = decode(&buf).unwrap();

    assert_eq!(message.questions[1].name, name("mail.com"));
}

#[test]
fn test_pointer_chain_resolves_like_inline() {
    // 0: "x.y" inline, 5: pointer to 0, 7: "w" + pointer to 5
    let buf = WireBuilder::new()
        .name(&["x", "y"])
        .pointer(0)
        .name_then_pointer(&["w"], 5)
        .build();

    let (chained, next) = read_name(&buf, 7, buf.len()).unwrap();
    assert_eq!(chained, name("w.x.y"));
    assert_eq!(next, buf.len());

    let (via_one, next) = read_name(&buf, 5, buf.len()).unwrap();
    assert_eq!(via_one, name("x.y"));
    assert_eq!(next, 7);
}

#[test]
fn test_forward_pointer_is_a_loop() {
    // 0: pointer to 2, 2: pointer to 0
    let buf = WireBuilder::new().pointer(2).pointer(0).build();

    assert!(matches!(
        read_name(&buf, 0, buf.len()),
        Err(CodecError::PointerLoop { offset: 0, target: 2, .. })
    ));
}

#[test]
fn test_mutual_pointers_inside_message_fail() {
    let builder = WireBuilder::new().header(1, 0, 1, 0, 0, 0);
    let at = builder.offset();
    let buf = builder.pointer(at + 2).pointer(at).u16(TYPE_A).u16(CLASS_IN).build();

    assert!(matches!(decode(&buf), Err(CodecError::PointerLoop { .. })));
}

#[test]
fn test_label_then_pointer_to_own_start_is_a_loop() {
    let label = "a".repeat(63);
    let builder = WireBuilder::new().header(1, 0, 1, 0, 0, 0);
    let start = builder.offset();
    let buf = builder
        .name_then_pointer(&[label.as_str()], start)
        .u16(TYPE_A)
        .u16(CLASS_IN)
        .build();

    assert_eq!(
        decode(&buf),
        Err(CodecError::PointerLoop {
            offset: 12 + 1 + 63,
            target: 12,
            hops: 1
        })
    );
}

#[test]
fn test_pointer_into_earlier_segment_of_chain_is_a_loop() {
    // 0: "x" + ptr->4, 4: "y" + ptr->0. Reading from 4, the jump to 0 is
    // backward, but the pointer at 2 then targets 4, which is not before 0.
    let buf = WireBuilder::new()
        .name_then_pointer(&["x"], 4)
        .name_then_pointer(&["y"], 0)
        .build();

    assert!(matches!(
        read_name(&buf, 4, buf.len()),
        Err(CodecError::PointerLoop { offset: 2, target: 4, hops: 2 })
    ));
}

#[test]
fn test_hop_limit_bounds_chain_length() {
    // 0: "z", 3: ptr->0, 5: ptr->3, 7: ptr->5
    let buf = WireBuilder::new()
        .name(&["z"])
        .pointer(0)
        .pointer(3)
        .pointer(5)
        .build();

    assert_eq!(read_name(&buf, 7, 3).unwrap().0, name("z"));
    assert_eq!(
        read_name(&buf, 7, 2),
        Err(CodecError::PointerLoop {
            offset: 3,
            target: 0,
            hops: 3
        })
    );
}

#[test]
fn test_decode_honours_hop_limit() {
    let builder = WireBuilder::new().header(1, 0, 2, 0, 0, 0);
    let first = builder.offset();
    let buf = builder
        .name(&["a"])
        .u16(TYPE_A)
        .u16(CLASS_IN)
        .pointer(first)
        .u16(TYPE_A)
        .u16(CLASS_IN)
        .build();

    assert!(decode_with_limit(&buf, 1).is_ok());
    assert!(matches!(
        decode_with_limit(&buf, 0),
        Err(CodecError::PointerLoop { hops: 1, .. })
    ));
}

#[test]
fn test_pointer_beyond_message_is_malformed() {
    let buf = WireBuilder::new()
        .header(1, 0, 1, 0, 0, 0)
        .pointer(0x3FFF)
        .u16(TYPE_A)
        .u16(CLASS_IN)
        .build();

    assert!(matches!(
        decode(&buf),
        Err(CodecError::MalformedPointer {
            offset: 12,
            target: 0x3FFF,
            ..
        })
    ));
}

#[test]
fn test_pointer_cut_in_half_is_out_of_bounds() {
    let buf = WireBuilder::new().bytes(&[1, b'a', 0xC0]).build();

    assert!(matches!(
        read_name(&buf, 0, buf.len()),
        Err(CodecError::OutOfBounds { offset: 2, size: 2, .. })
    ));
}

#[test]
fn test_decoded_name_longer_than_255_is_rejected() {
    // Four 63-byte labels inline: 4 * 64 + 1 = 257 bytes.
    let label = "a".repeat(63);
    let label = label.as_str();
    let buf = WireBuilder::new().name(&[label, label, label, label]).build();

    assert!(matches!(
        read_name(&buf, 0, buf.len()),
        Err(CodecError::NameTooLong(_))
    ));
}
