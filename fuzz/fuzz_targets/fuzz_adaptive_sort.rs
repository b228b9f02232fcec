#![no_main]

use libfuzzer_sys::fuzz_target;

use typedbuf_core::TypedBuffer;

fuzz_target!(|data: &[u8]| {
    let values: Vec<i16> = data
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]))
        .collect();

    let mut buf = TypedBuffer::from_slice(&values);
    buf.sort();

    let mut expected = values;
    expected.sort_unstable();
    assert_eq!(buf.to_vec(), expected);
});
