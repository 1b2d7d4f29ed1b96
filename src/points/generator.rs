use glam::DVec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::spec::{Distribution, PointSpec, PointSpecError, Seed};

/// Parses `text` and generates the point cloud it describes.
pub fn generate(text: &str) -> Result<Vec<DVec3>, PointSpecError> {
    let spec = PointSpec::parse(text)?;
    Ok(generate_from_spec(&spec))
}

fn generate_from_spec(spec: &PointSpec) -> Vec<DVec3> {
    let seed = match spec.seed {
        Seed::FromSpec(s) | Seed::Fixed(s) => s,
        Seed::Time => time_seed(),
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let b = spec.box_size;

    let mut extra = 0;
    if spec.cube_corners {
        extra += 8;
    }
    if spec.diamond {
        extra += 6;
    }
    let mut points = Vec::with_capacity(spec.count + extra);

    for _ in 0..spec.count {
        let p = match spec.distribution {
            Distribution::Cube => DVec3::new(
                rng.random_range(-b..b),
                rng.random_range(-b..b),
                rng.random_range(-b..b),
            ),
            Distribution::Sphere => random_unit_vector(&mut rng) * b,
        };
        points.push(p);
    }

    if spec.cube_corners {
        for i in 0..8 {
            let sign = |bit: u32| if i & bit == 0 { -b } else { b };
            points.push(DVec3::new(sign(1), sign(2), sign(4)));
        }
    }

    if spec.diamond {
        for axis in [DVec3::X, DVec3::Y, DVec3::Z] {
            points.push(axis * b);
            points.push(-axis * b);
        }
    }

    log::debug!(
        "generated {} points (seed {seed}, {:?})",
        points.len(),
        spec.distribution
    );

    points
}

fn random_unit_vector(rng: &mut StdRng) -> DVec3 {
    loop {
        let v = DVec3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-6 && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
