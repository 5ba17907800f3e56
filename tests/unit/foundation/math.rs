use super::*;

#[test]
fn fnv_hash_is_stable_across_split_writes() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"arte");
    let mut b = Fnv1a64::new_default();
    b.write_u8(b'a');
    b.write_bytes(b"rte");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn fnv_distinguishes_inputs() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"inset1");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"inset2");
    assert_ne!(a.finish(), b.finish());
}

#[test]
fn premultiply_then_unpremultiply_is_close() {
    let mut px = vec![200u8, 100, 50, 128, 10, 20, 30, 0, 9, 8, 7, 255];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
    assert_eq!(&px[8..12], &[9, 8, 7, 255]);
    unpremultiply_rgba8_in_place(&mut px);
    assert!((i16::from(px[0]) - 200).abs() <= 1);
    assert!((i16::from(px[1]) - 100).abs() <= 1);
    assert!((i16::from(px[2]) - 50).abs() <= 1);
    assert_eq!(px[3], 128);
}
