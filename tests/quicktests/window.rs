use ordkit::window::{max_pool, Pooling};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn output_length_matches_window_count(values: Vec<i32>, window: u8) -> bool {
    let window = usize::from(window % 16) + 1;
    match max_pool(&values, window) {
        Ok(maxima) => maxima.len() == values.len() - window + 1,
        Err(_) => values.len() < window,
    }
}

#[quickcheck]
fn every_maximum_bounds_its_window(values: Vec<i32>, window: u8, stride: u8) -> bool {
    let pooling = Pooling::new(usize::from(window % 6) + 1).with_stride(usize::from(stride % 3) + 1);
    let Ok(maxima) = pooling.apply(&values) else {
        return values.len() < pooling.window;
    };

    maxima.iter().enumerate().all(|(i, max)| {
        let start = i * pooling.stride;
        let window = &values[start..start + pooling.window];
        window.contains(max) && window.iter().all(|v| v <= max)
    })
}
