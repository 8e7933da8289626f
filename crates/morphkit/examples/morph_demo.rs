use morphkit::image::{Image, ImageSize};
use morphkit::keyframe::KeyframeStore;
use morphkit::warp::{morph, InterpolationMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let size = ImageSize {
        width: 256,
        height: 256,
    };

    // two synthetic sources, a horizontal and a vertical gradient
    let left = Image::<u8, 1>::new(
        size,
        (0..size.height)
            .flat_map(|_| (0..size.width).map(|x| x as u8))
            .collect(),
    )?;
    let right = Image::<u8, 1>::new(
        size,
        (0..size.height)
            .flat_map(|y| (0..size.width).map(move |_| y as u8))
            .collect(),
    )?;

    // pin the corners at frame 0 and 30
    let mut store = KeyframeStore::new();
    let edge = (size.width - 1) as f64;
    for p in [[0.0, 0.0], [edge, 0.0], [0.0, edge], [edge, edge]] {
        store.add_point(p, p, 0)?;
    }

    // a center landmark that drifts apart over time
    let center = store.add_point([128.0, 128.0], [128.0, 128.0], 30)?;
    store.update_point(Some([96.0, 128.0]), Some([160.0, 128.0]), 30, center)?;

    // render a short sweep through time and blend
    for (time, blend) in [(0u32, 0.0), (10, 0.25), (15, 0.5), (20, 0.75), (30, 1.0)] {
        let triple = store.query_blend(blend, time)?;

        let mut output = Image::<u8, 1>::from_size_val(size, 0)?;
        morph(
            &left,
            &right,
            &mut output,
            &triple.left,
            &triple.right,
            &triple.blended,
            blend,
            InterpolationMode::Bilinear,
        )?;

        let sum: u64 = output.as_slice().iter().map(|&x| x as u64).sum();
        let mean = sum as f64 / output.as_slice().len() as f64;
        println!(
            "frame {:2}, blend {:.2}: center pixel {:3}, mean {:6.2}",
            time,
            blend,
            output.get([128, 128, 0]).copied().unwrap_or_default(),
            mean
        );
    }

    Ok(())
}
