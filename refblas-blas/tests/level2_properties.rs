mod common;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::Rng;
use refblas_blas::{
    gbmv, gemv, ger, sbmv, spmv, spr, spr2, symv, syr, syr2, tbmv, tbsv, tpmv, tpsv, trmv, trsv,
    Diag, Transpose, Uplo,
};
use refblas_core::storage::{packed_index, packed_len};
use refblas_core::{Band, TriBand};

use common::*;

const TRANSPOSES: [Transpose; 3] = [Transpose::NoTrans, Transpose::Trans, Transpose::ConjTrans];
const UPLOS: [Uplo; 2] = [Uplo::Upper, Uplo::Lower];
const DIAGS: [Diag; 2] = [Diag::NonUnit, Diag::Unit];

fn assert_close(got: &[f64], want: &[f64]) {
    assert_eq!(got.len(), want.len());
    for (g, w) in got.iter().zip(want) {
        assert_abs_diff_eq!(g, w, epsilon = 1e-12);
    }
}

#[test]
fn gemv_matches_naive_sum() {
    let mut rng = seeded_rng(7);
    for _ in 0..200 {
        let m = rng.gen_range(1..9);
        let n = rng.gen_range(1..9);
        let lda = n + rng.gen_range(0..3);
        let trans = TRANSPOSES[rng.gen_range(0..3)];
        let (incx, incy) = (pick_inc(&mut rng), pick_inc(&mut rng));
        let alpha = rng.gen_range(-2.0..2.0);
        let beta = rng.gen_range(-2.0..2.0);

        let (len_x, len_y) = if trans.is_trans() { (m, n) } else { (n, m) };
        let a = random_vec(&mut rng, m * lda);
        let x = random_vec(&mut rng, len_x);
        let y0 = random_vec(&mut rng, len_y);

        let xb = embed(&x, incx);
        let mut yb = embed(&y0, incy);
        gemv(trans, m, n, alpha, &a, lda, &xb, incx, beta, &mut yb, incy).unwrap();

        let want = naive_gemv(trans.is_trans(), m, n, alpha, &a, lda, &x, beta, &y0);
        assert_close(&extract(&yb, len_y, incy), &want);
    }
}

#[test]
fn ger_matches_outer_product() {
    let mut rng = seeded_rng(11);
    for _ in 0..100 {
        let m = rng.gen_range(1..7);
        let n = rng.gen_range(1..7);
        let lda = n + 1;
        let (incx, incy) = (pick_inc(&mut rng), pick_inc(&mut rng));
        let alpha = rng.gen_range(-2.0..2.0);
        let x = random_vec(&mut rng, m);
        let y = random_vec(&mut rng, n);
        let a0 = random_vec(&mut rng, m * lda);

        let mut a = a0.clone();
        ger(m, n, alpha, &embed(&x, incx), incx, &embed(&y, incy), incy, &mut a, lda).unwrap();
        for i in 0..m {
            for j in 0..n {
                let want = a0[i * lda + j] + alpha * x[i] * y[j];
                assert_abs_diff_eq!(a[i * lda + j], want, epsilon = 1e-12);
            }
            // Padding column is not part of the matrix.
            assert_eq!(a[i * lda + n], a0[i * lda + n]);
        }
    }
}

#[test]
fn trsv_and_trmv_are_inverse() {
    let mut rng = seeded_rng(13);
    for _ in 0..100 {
        let n = rng.gen_range(1..10);
        let uplo = UPLOS[rng.gen_range(0..2)];
        let trans = TRANSPOSES[rng.gen_range(0..2)];
        let diag = DIAGS[rng.gen_range(0..2)];
        let incx = pick_inc(&mut rng);
        let a = well_conditioned_triangle(&mut rng, n, uplo == Uplo::Upper);
        let x = random_vec(&mut rng, n);

        // multiply then solve
        let mut buf = embed(&x, incx);
        trmv(uplo, trans, diag, n, &a, n, &mut buf, incx).unwrap();
        trsv(uplo, trans, diag, n, &a, n, &mut buf, incx).unwrap();
        for (got, want) in extract(&buf, n, incx).iter().zip(&x) {
            assert_relative_eq!(got, want, epsilon = 1e-10, max_relative = 1e-10);
        }

        // solve then multiply
        let mut buf = embed(&x, incx);
        trsv(uplo, trans, diag, n, &a, n, &mut buf, incx).unwrap();
        trmv(uplo, trans, diag, n, &a, n, &mut buf, incx).unwrap();
        for (got, want) in extract(&buf, n, incx).iter().zip(&x) {
            assert_relative_eq!(got, want, epsilon = 1e-10, max_relative = 1e-10);
        }
    }
}

#[test]
fn trmv_ignores_the_other_triangle() {
    let mut rng = seeded_rng(17);
    let n = 6;
    for uplo in UPLOS {
        let clean = well_conditioned_triangle(&mut rng, n, uplo == Uplo::Upper);
        let mut dirty = clean.clone();
        for i in 0..n {
            for j in 0..n {
                let stored = if uplo == Uplo::Upper { j >= i } else { j <= i };
                if !stored {
                    dirty[i * n + j] = f64::NAN;
                }
            }
        }
        let x = random_vec(&mut rng, n);
        for trans in TRANSPOSES {
            let mut want = x.clone();
            trmv(uplo, trans, Diag::NonUnit, n, &clean, n, &mut want, 1).unwrap();
            let mut got = x.clone();
            trmv(uplo, trans, Diag::NonUnit, n, &dirty, n, &mut got, 1).unwrap();
            assert_eq!(got, want);
        }
    }
}

#[test]
fn gbmv_matches_dense_embedding() {
    let mut rng = seeded_rng(19);
    for _ in 0..200 {
        let m = rng.gen_range(1..9);
        let n = rng.gen_range(1..9);
        let kl = rng.gen_range(0..4);
        let ku = rng.gen_range(0..4);
        let band = Band::new(m, n, kl, ku);
        let lda = band.width() + rng.gen_range(0..2);
        let trans = TRANSPOSES[rng.gen_range(0..2)];
        let (incx, incy) = (pick_inc(&mut rng), pick_inc(&mut rng));
        let alpha = rng.gen_range(-2.0..2.0);
        let beta = rng.gen_range(-2.0..2.0);

        // Cells outside the band are never read.
        let mut ab = vec![f64::NAN; m * lda];
        let mut dense = vec![0.0; m * n];
        for i in 0..m {
            for j in 0..n {
                if let Some(p) = band.index(i, j, lda) {
                    let v = rng.gen_range(-1.0..1.0);
                    ab[p] = v;
                    dense[i * n + j] = v;
                }
            }
        }

        let (len_x, len_y) = if trans.is_trans() { (m, n) } else { (n, m) };
        let x = embed(&random_vec(&mut rng, len_x), incx);
        let y0 = embed(&random_vec(&mut rng, len_y), incy);

        let mut want = y0.clone();
        gemv(trans, m, n, alpha, &dense, n, &x, incx, beta, &mut want, incy).unwrap();
        let mut got = y0.clone();
        gbmv(trans, m, n, kl, ku, alpha, &ab, lda, &x, incx, beta, &mut got, incy).unwrap();
        assert_close(&got, &want);
    }
}

fn random_triangular_band(
    rng: &mut rand::rngs::StdRng,
    uplo: Uplo,
    n: usize,
    k: usize,
    lda: usize,
) -> (Vec<f64>, Vec<f64>) {
    let shape = TriBand::new(uplo, n, k);
    let mut ab = vec![f64::NAN; n * lda];
    let mut dense = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            if let Some(p) = shape.index(i, j, lda) {
                let v = if i == j {
                    rng.gen_range(1.0..2.0)
                } else {
                    rng.gen_range(-0.25..0.25)
                };
                ab[p] = v;
                dense[i * n + j] = v;
            }
        }
    }
    (ab, dense)
}

#[test]
fn tbmv_and_tbsv_match_dense_triangular() {
    let mut rng = seeded_rng(23);
    for _ in 0..200 {
        let n = rng.gen_range(1..9);
        let k = rng.gen_range(0..n + 1);
        let lda = k + 1 + rng.gen_range(0..2);
        let uplo = UPLOS[rng.gen_range(0..2)];
        let trans = TRANSPOSES[rng.gen_range(0..2)];
        let diag = DIAGS[rng.gen_range(0..2)];
        let incx = pick_inc(&mut rng);
        let (ab, dense) = random_triangular_band(&mut rng, uplo, n, k, lda);
        let x = embed(&random_vec(&mut rng, n), incx);

        let mut want = x.clone();
        trmv(uplo, trans, diag, n, &dense, n, &mut want, incx).unwrap();
        let mut got = x.clone();
        tbmv(uplo, trans, diag, n, k, &ab, lda, &mut got, incx).unwrap();
        assert_close(&got, &want);

        let mut want = x.clone();
        trsv(uplo, trans, diag, n, &dense, n, &mut want, incx).unwrap();
        let mut got = x.clone();
        tbsv(uplo, trans, diag, n, k, &ab, lda, &mut got, incx).unwrap();
        assert_close(&got, &want);
    }
}

#[test]
fn sbmv_matches_dense_symv() {
    let mut rng = seeded_rng(29);
    for _ in 0..200 {
        let n = rng.gen_range(1..9);
        let k = rng.gen_range(0..n + 1);
        let lda = k + 1;
        let uplo = UPLOS[rng.gen_range(0..2)];
        let (incx, incy) = (pick_inc(&mut rng), pick_inc(&mut rng));
        let alpha = rng.gen_range(-2.0..2.0);
        let beta = rng.gen_range(-2.0..2.0);

        let shape = TriBand::new(uplo, n, k);
        let mut ab = vec![f64::NAN; n * lda];
        let mut dense = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                if let Some(p) = shape.index(i, j, lda) {
                    let v = rng.gen_range(-1.0..1.0);
                    ab[p] = v;
                    dense[i * n + j] = v;
                    dense[j * n + i] = v;
                }
            }
        }
        let x = embed(&random_vec(&mut rng, n), incx);
        let y0 = embed(&random_vec(&mut rng, n), incy);

        let mut want = y0.clone();
        symv(uplo, n, alpha, &dense, n, &x, incx, beta, &mut want, incy).unwrap();
        let mut got = y0.clone();
        sbmv(uplo, n, k, alpha, &ab, lda, &x, incx, beta, &mut got, incy).unwrap();
        assert_close(&got, &want);
    }
}

fn pack(uplo: Uplo, n: usize, dense: &[f64]) -> Vec<f64> {
    let mut ap = vec![0.0; packed_len(n)];
    for i in 0..n {
        for j in 0..n {
            if let Some(p) = packed_index(uplo, n, i, j) {
                ap[p] = dense[i * n + j];
            }
        }
    }
    ap
}

#[test]
fn tpmv_and_tpsv_match_dense_triangular() {
    let mut rng = seeded_rng(31);
    for _ in 0..200 {
        let n = rng.gen_range(1..9);
        let uplo = UPLOS[rng.gen_range(0..2)];
        let trans = TRANSPOSES[rng.gen_range(0..2)];
        let diag = DIAGS[rng.gen_range(0..2)];
        let incx = pick_inc(&mut rng);
        let dense = well_conditioned_triangle(&mut rng, n, uplo == Uplo::Upper);
        let ap = pack(uplo, n, &dense);
        let x = embed(&random_vec(&mut rng, n), incx);

        let mut want = x.clone();
        trmv(uplo, trans, diag, n, &dense, n, &mut want, incx).unwrap();
        let mut got = x.clone();
        tpmv(uplo, trans, diag, n, &ap, &mut got, incx).unwrap();
        assert_close(&got, &want);

        let mut want = x.clone();
        trsv(uplo, trans, diag, n, &dense, n, &mut want, incx).unwrap();
        let mut got = x.clone();
        tpsv(uplo, trans, diag, n, &ap, &mut got, incx).unwrap();
        assert_close(&got, &want);
    }
}

fn random_symmetric(rng: &mut rand::rngs::StdRng, n: usize) -> Vec<f64> {
    let mut a = vec![0.0; n * n];
    for i in 0..n {
        for j in i..n {
            let v = rng.gen_range(-1.0..1.0);
            a[i * n + j] = v;
            a[j * n + i] = v;
        }
    }
    a
}

#[test]
fn packed_symmetric_kernels_match_dense() {
    let mut rng = seeded_rng(37);
    for _ in 0..150 {
        let n = rng.gen_range(1..8);
        let uplo = UPLOS[rng.gen_range(0..2)];
        let (incx, incy) = (pick_inc(&mut rng), pick_inc(&mut rng));
        let alpha = rng.gen_range(-2.0..2.0);
        let beta = rng.gen_range(-2.0..2.0);
        let a = random_symmetric(&mut rng, n);
        let ap = pack(uplo, n, &a);
        let x = embed(&random_vec(&mut rng, n), incx);
        let y = embed(&random_vec(&mut rng, n), incy);

        let mut want = y.clone();
        symv(uplo, n, alpha, &a, n, &x, incx, beta, &mut want, incy).unwrap();
        let mut got = y.clone();
        spmv(uplo, n, alpha, &ap, &x, incx, beta, &mut got, incy).unwrap();
        assert_close(&got, &want);

        let mut dense = a.clone();
        syr(uplo, n, alpha, &x, incx, &mut dense, n).unwrap();
        let mut packed = ap.clone();
        spr(uplo, n, alpha, &x, incx, &mut packed).unwrap();
        assert_close(&packed, &pack(uplo, n, &dense));

        let mut dense = a.clone();
        syr2(uplo, n, alpha, &x, incx, &y, incy, &mut dense, n).unwrap();
        let mut packed = ap.clone();
        spr2(uplo, n, alpha, &x, incx, &y, incy, &mut packed).unwrap();
        assert_close(&packed, &pack(uplo, n, &dense));
    }
}

#[test]
fn syr_touches_only_the_stored_triangle() {
    let mut rng = seeded_rng(41);
    let n = 5;
    let x = random_vec(&mut rng, n);
    for uplo in UPLOS {
        let a0 = random_symmetric(&mut rng, n);
        let mut a = a0.clone();
        syr(uplo, n, 1.5, &x, 1, &mut a, n).unwrap();
        for i in 0..n {
            for j in 0..n {
                let stored = if uplo == Uplo::Upper { j >= i } else { j <= i };
                let want = if stored {
                    a0[i * n + j] + 1.5 * x[i] * x[j]
                } else {
                    a0[i * n + j]
                };
                assert_abs_diff_eq!(a[i * n + j], want, epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn negative_increment_reads_a_reversed_buffer() {
    let mut rng = seeded_rng(43);
    let (m, n) = (5, 4);
    let a = random_vec(&mut rng, m * n);
    let x = random_vec(&mut rng, n);
    let y0 = random_vec(&mut rng, m);

    let mut forward = y0.clone();
    gemv(Transpose::NoTrans, m, n, 1.0, &a, n, &x, 1, 0.5, &mut forward, 1).unwrap();

    // The same logical vectors, stored back to front.
    let x_rev: Vec<f64> = x.iter().rev().copied().collect();
    let mut y_rev: Vec<f64> = y0.iter().rev().copied().collect();
    gemv(Transpose::NoTrans, m, n, 1.0, &a, n, &x_rev, -1, 0.5, &mut y_rev, -1).unwrap();
    y_rev.reverse();
    assert_eq!(y_rev, forward);

    let lower = well_conditioned_triangle(&mut rng, n, false);
    let mut forward = x.clone();
    trsv(Uplo::Lower, Transpose::Trans, Diag::NonUnit, n, &lower, n, &mut forward, 1).unwrap();
    let mut reversed = x_rev.clone();
    trsv(Uplo::Lower, Transpose::Trans, Diag::NonUnit, n, &lower, n, &mut reversed, -1).unwrap();
    reversed.reverse();
    assert_eq!(reversed, forward);
}

#[test]
fn single_precision_agrees_with_double() {
    let a64 = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
    let a32: Vec<f32> = a64.iter().map(|&v| v as f32).collect();
    let mut y64 = [0.0f64; 3];
    let mut y32 = [0.0f32; 3];
    gemv(Transpose::Trans, 2, 3, 1.0, &a64, 3, &[1.0, -1.0], 1, 0.0, &mut y64, 1).unwrap();
    gemv(Transpose::Trans, 2, 3, 1.0f32, &a32, 3, &[1.0, -1.0], 1, 0.0, &mut y32, 1).unwrap();
    assert_eq!(y64, [-3.0, -3.0, -3.0]);
    assert_eq!(y32, [-3.0, -3.0, -3.0]);
}
