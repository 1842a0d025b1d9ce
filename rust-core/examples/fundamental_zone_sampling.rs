/// Example sampling the fundamental zones of a few crystal symmetries
///
/// Run with RUST_LOG=debug to see grid sizes and reduction counts.
use env_logger::Env;
use so3_sampling::fundamental_zone::disorientation;
use so3_sampling::rotations::{from_axis_angle, rotation_angle};
use so3_sampling::{
    sample_fundamental, sample_local, LocalSampleRequest, SampleRequest, SamplingMethod,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("=== Fundamental zone samples at 5° ===\n");
    for symbol in ["m-3m", "6/mmm", "4/mmm", "mmm", "-1"] {
        for method in SamplingMethod::ALL {
            let request = SampleRequest::for_point_group(symbol)
                .with_resolution(5.0)
                .with_method(method);
            let sample = sample_fundamental(&request)?;
            println!(
                "   {:>6} {:>11}: {:>6} orientations (parameter {})",
                symbol,
                method,
                sample.len(),
                sample.density_parameter()
            );
        }
    }

    println!("\n=== Space group 194 (P6_3/mmc) ===");
    let sample = sample_fundamental(&SampleRequest::for_space_group(194).with_density(12))?;
    let largest = sample
        .iter()
        .map(rotation_angle)
        .fold(0.0_f64, f64::max);
    println!(
        "   {} orientations, largest rotation angle {:.2}°",
        sample.len(),
        largest.to_degrees()
    );

    println!("\n=== Local sample of 8° around a Goss-like orientation ===");
    let center = from_axis_angle(nalgebra::Vector3::x(), 45f64.to_radians());
    let local = sample_local(
        &LocalSampleRequest::new()
            .with_resolution(2.0)
            .with_grid_width(8.0)
            .with_center(center),
    )?;
    let operators = so3_sampling::SymmetrySpecifier::PointGroup("m-3m".to_string()).resolve()?;
    let spread = local
        .iter()
        .map(|q| disorientation(q, &center, &operators))
        .fold(0.0_f64, f64::max);
    println!(
        "   {} orientations, widest cubic disorientation from centre {:.2}°",
        local.len(),
        spread.to_degrees()
    );

    Ok(())
}
