#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Derive dimensions and pixels from the input; encoding a valid image
    // must never panic and must uphold the container's structural invariants.
    let [w, h, pixel_data @ ..] = data else { return };
    let width = (*w % 64) as u32 + 1;
    let height = (*h % 64) as u32 + 1;
    let needed = (width * height * 4) as usize;

    let mut pixels = vec![0u8; needed];
    for (dst, src) in pixels.iter_mut().zip(pixel_data.iter().cycle().take(needed)) {
        *dst = *src;
    }

    let image = zenico::SourceImage::new(width, height, pixels).unwrap();
    let encoded = zenico::ico::encode(std::slice::from_ref(&image)).unwrap();

    assert_eq!(&encoded[2..4], &1u16.to_le_bytes());
    assert_eq!(&encoded[4..6], &1u16.to_le_bytes());
    assert_eq!(encoded.len(), 6 + 16 + 40 + needed);
    assert_eq!(encoded[6], width as u8);
    assert_eq!(encoded[7], height as u8);
});
