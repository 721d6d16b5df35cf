use rayon::prelude::*;
use std::num::NonZeroU32;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;
use crate::core::util::calculate_tiles_in_image::calculate_tiles_in_image;

/// Results for the in-image part of one tile, row-major.
struct TileOutput<T> {
    origin: Point,
    visible_width: usize,
    values: Vec<T>,
}

fn compute_tile<Alg: FractalAlgorithm>(
    origin: Point,
    tile_size: u32,
    image_size: ImageSize,
    algorithm: &Alg,
) -> Result<TileOutput<Alg::Success>, Alg::Failure> {
    let tile_size = tile_size as i32;
    let visible_width = (image_size.width() as i32 - origin.x).min(tile_size) as usize;
    let mut values = Vec::with_capacity(visible_width * tile_size as usize);

    for y in origin.y..origin.y + tile_size {
        for x in origin.x..origin.x + tile_size {
            let pixel = Point { x, y };

            // Edge tiles hang past the image when its size is not a tile multiple.
            if !image_size.contains_point(pixel) {
                continue;
            }

            values.push(algorithm.compute(pixel)?);
        }
    }

    Ok(TileOutput {
        origin,
        visible_width,
        values,
    })
}

/// Generates fractal data by evaluating square tiles in parallel on rayon's
/// work-stealing pool.
///
/// Each tile is computed independently into its own storage and the tiles are
/// stitched into a row-major grid afterwards, so the output is identical to
/// [`generate_fractal`](super::generate_fractal::generate_fractal) regardless
/// of tile size or scheduling order.
pub fn generate_fractal_tiled_rayon<Alg>(
    image_size: ImageSize,
    tile_size: NonZeroU32,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send + Clone + Default,
    Alg::Failure: Send,
{
    let (columns, rows) = calculate_tiles_in_image(tile_size, image_size);
    let tile = tile_size.get();

    let tiles: Vec<TileOutput<Alg::Success>> = (0..columns * rows)
        .into_par_iter()
        .map(|index| {
            let origin = Point {
                x: ((index % columns) * tile) as i32,
                y: ((index / columns) * tile) as i32,
            };

            compute_tile(origin, tile, image_size, algorithm)
        })
        .collect::<Result<_, _>>()?;

    let width = image_size.width() as usize;
    let mut grid = vec![Alg::Success::default(); image_size.pixel_count()];

    for tile in tiles {
        for (row_offset, row) in tile.values.chunks(tile.visible_width).enumerate() {
            let start = (tile.origin.y as usize + row_offset) * width + tile.origin.x as usize;
            grid[start..start + row.len()].clone_from_slice(row);
        }
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use std::collections::HashSet;
    use std::error::Error;
    use std::fmt;
    use std::sync::Mutex;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok((pixel.y as u64) * 10_000 + pixel.x as u64)
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm {}

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }
    }

    /// Records every pixel it is asked for; rejects out-of-image pixels.
    struct RecordingAlgorithm {
        image_size: ImageSize,
        seen: Mutex<Vec<Point>>,
    }

    impl FractalAlgorithm for RecordingAlgorithm {
        type Success = u32;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if !self.image_size.contains_point(pixel) {
                return Err(StubError {});
            }

            self.seen.lock().unwrap().push(pixel);
            Ok(1)
        }
    }

    fn tile_size(size: u32) -> NonZeroU32 {
        NonZeroU32::new(size).unwrap()
    }

    #[test]
    fn test_tiled_matches_serial_for_exact_tile_multiple() {
        let image_size = ImageSize::new(64, 32).unwrap();
        let algorithm = StubSuccessAlgorithm {};

        let serial = generate_fractal(image_size, &algorithm).unwrap();
        let tiled = generate_fractal_tiled_rayon(image_size, tile_size(16), &algorithm).unwrap();

        assert_eq!(tiled, serial);
    }

    #[test]
    fn test_tiled_matches_serial_when_size_is_not_a_tile_multiple() {
        let algorithm = StubSuccessAlgorithm {};

        for (width, height) in [(17, 33), (1, 1), (15, 16), (100, 3)] {
            let image_size = ImageSize::new(width, height).unwrap();

            let serial = generate_fractal(image_size, &algorithm).unwrap();
            let tiled =
                generate_fractal_tiled_rayon(image_size, tile_size(16), &algorithm).unwrap();

            assert_eq!(tiled, serial, "mismatch for {}x{}", width, height);
        }
    }

    #[test]
    fn test_tile_shape_does_not_change_result() {
        let image_size = ImageSize::new(37, 23).unwrap();
        let algorithm = StubSuccessAlgorithm {};
        let expected = generate_fractal(image_size, &algorithm).unwrap();

        for size in [1, 2, 7, 16, 64] {
            let tiled = generate_fractal_tiled_rayon(image_size, tile_size(size), &algorithm);

            assert_eq!(tiled.unwrap(), expected, "mismatch for tile size {}", size);
        }
    }

    #[test]
    fn test_every_pixel_computed_exactly_once_and_none_outside() {
        let image_size = ImageSize::new(21, 18).unwrap();
        let algorithm = RecordingAlgorithm {
            image_size,
            seen: Mutex::new(Vec::new()),
        };

        let result = generate_fractal_tiled_rayon(image_size, tile_size(8), &algorithm);

        assert!(result.is_ok());
        let seen = algorithm.seen.into_inner().unwrap();
        let unique: HashSet<Point> = seen.iter().copied().collect();
        assert_eq!(seen.len(), image_size.pixel_count());
        assert_eq!(unique.len(), image_size.pixel_count());
    }

    #[test]
    fn test_tiled_propagates_algorithm_failure() {
        let image_size = ImageSize::new(20, 20).unwrap();

        let result = generate_fractal_tiled_rayon(image_size, tile_size(16), &StubFailureAlgorithm {});

        assert_eq!(result, Err(StubError {}));
    }
}
