#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;

use typedbuf_core::{TypedBuffer, MIN_CAPACITY};

// Interpret the input as an op stream and check the buffer against a
// VecDeque reference model after every step.
fuzz_target!(|data: &[u8]| {
    let mut buf = TypedBuffer::<i16>::with_len(0).unwrap();
    let mut model: VecDeque<i16> = VecDeque::new();

    for chunk in data.chunks(2) {
        let operand = chunk.get(1).copied().unwrap_or(0);
        let value = i16::from(operand);
        match chunk[0] % 6 {
            0 => {
                buf.push(value).unwrap();
                model.push_back(value);
            }
            1 => {
                buf.unshift(value).unwrap();
                model.push_front(value);
            }
            2 => {
                assert_eq!(buf.pop().ok(), model.pop_back());
            }
            3 => {
                assert_eq!(buf.shift().ok(), model.pop_front());
            }
            4 => {
                let index = usize::from(operand);
                buf.set(index, value).unwrap();
                if index >= model.len() {
                    model.resize(index + 1, 0);
                }
                model[index] = value;
            }
            _ => {
                buf.compact().unwrap();
            }
        }
        assert!(buf.capacity() >= buf.len().max(MIN_CAPACITY));
        assert_eq!(buf.len(), model.len());
    }

    assert_eq!(buf.to_vec(), model.into_iter().collect::<Vec<_>>());
});
