use criterion::{black_box, Criterion, criterion_group};

use bigsum::data::number_types::{Signed, Unsigned};

fn nines(length: usize) -> Unsigned {
    Unsigned::from("9".repeat(length).as_str())
}

pub fn add_small(c: &mut Criterion) {
    let (a, b) = (nines(50), nines(50));
    c.bench_function("add two 50 digit numbers", |bencher| bencher.iter(|| {
        black_box(&a) + black_box(&b)
    }));
}

pub fn add_large(c: &mut Criterion) {
    let (a, b) = (nines(5000), nines(5000));
    c.bench_function("add two 5000 digit numbers", |bencher| bencher.iter(|| {
        black_box(&a) + black_box(&b)
    }));
}

pub fn sub_large(c: &mut Criterion) {
    let a = Unsigned::from(format!("1{}", "0".repeat(5000)).as_str());
    let b = nines(5000);
    c.bench_function("subtract with a borrow through 5000 digits", |bencher| bencher.iter(|| {
        black_box(&a) - black_box(&b)
    }));
}

pub fn cmp_large(c: &mut Criterion) {
    let a = nines(5000);
    let b = nines(5000);
    c.bench_function("compare two equal 5000 digit numbers", |bencher| bencher.iter(|| {
        black_box(&a).cmp(black_box(&b))
    }));
}

pub fn signed_sub(c: &mut Criterion) {
    let text = format!("-{}", "9".repeat(500));
    let a = Signed::from(text.as_str());
    c.bench_function("signed subtraction of 500 digit numbers", |bencher| bencher.iter(|| {
        black_box(a.clone()) - black_box(a.clone())
    }));
}

criterion_group!(arithmetic,
    add_small,
    add_large,
    sub_large,
    cmp_large,
    signed_sub,
);
