use honggfuzz::fuzz;
use keccak_bitcount::generate_bitfield;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if data.len() < 34 {
                return;
            }
            let mut seed = [0u8; 32];
            seed.copy_from_slice(&data[..32]);
            let size = u16::from_be_bytes([data[32], data[33]]) as usize % 2048 + 1;
            let field = generate_bitfield(&seed, size);
            assert!(field.value.bits() <= size as u64);
        });
    }
}
