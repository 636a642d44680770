use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::cell::Cell;

/// Evaluates a raster-ordered grid on the rayon pool, one task per row.
///
/// All rows are joined before returning, and the results come back in the
/// same order as [`generate_fractal`](super::generate_fractal::generate_fractal)
/// would produce them.
pub fn generate_fractal_rayon<Alg>(
    cells: &[Cell],
    grid_size: u32,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let row_width = (grid_size as usize).max(1);

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = cells
        .par_chunks(row_width)
        .map(|row| {
            row.iter()
                .map(|cell| algorithm.compute(cell.point))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
