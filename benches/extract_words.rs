//! Word extraction throughput on full-size grids.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_peel::{extract_words, Coord, Grid, Tile, TileId};

/// Every cell filled, so every row and column is one long word.
fn dense_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size);
    for row in 0..size {
        for col in 0..size {
            let id = (row * size + col) as u32;
            let letter = (b'A' + (id % 26) as u8) as char;
            let _ = grid.put(Coord::new(row, col), Tile::new(TileId(id), letter));
        }
    }
    grid
}

/// A crossword-like lattice: every other row filled, plus every fourth column.
fn sparse_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size);
    let mut id = 0u32;
    for row in 0..size {
        for col in 0..size {
            if row % 2 == 0 || col % 4 == 0 {
                let letter = (b'A' + (id % 26) as u8) as char;
                let _ = grid.put(Coord::new(row, col), Tile::new(TileId(id), letter));
                id += 1;
            }
        }
    }
    grid
}

fn bench_extract(c: &mut Criterion) {
    let dense = dense_grid(25);
    let sparse = sparse_grid(25);
    let empty = Grid::new(25);

    c.bench_function("extract_words/dense_25", |b| {
        b.iter(|| extract_words(black_box(&dense)))
    });
    c.bench_function("extract_words/sparse_25", |b| {
        b.iter(|| extract_words(black_box(&sparse)))
    });
    c.bench_function("extract_words/empty_25", |b| {
        b.iter(|| extract_words(black_box(&empty)))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
