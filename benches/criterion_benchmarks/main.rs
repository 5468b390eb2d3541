use criterion::criterion_main;

mod arithmetic;

criterion_main!(arithmetic::arithmetic);
