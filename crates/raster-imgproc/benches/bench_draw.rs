use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use raster_image::{Image, Rgba};
use raster_imgproc::draw::{draw_filled_rect, draw_line};

fn bench_draw(c: &mut Criterion) {
    let sizes = [(512, 512), (1024, 1024)];
    let color = Rgba::rgb(255, 0, 0);

    //line benchmarks
    {
        let mut group = c.benchmark_group("Draw Line");

        for (width, height) in sizes.iter() {
            let image_size = [*width, *height].into();
            let parameter_string = format!("{}x{}", width, height);

            let p0_h = (0, (*height as i64) / 2);
            let p1_h = ((*width as i64) - 1, (*height as i64) / 2);
            let p0_d = (0, 0);
            let p1_d = ((*width as i64) - 1, (*height as i64) - 1);

            // Horizontal Line bench
            group.bench_with_input(
                BenchmarkId::new("Horizontal", &parameter_string),
                &(p0_h, p1_h),
                |b, &(p0, p1)| {
                    let mut img = Image::new(image_size).unwrap();
                    b.iter(|| draw_line(&mut img, p0, p1, color).unwrap())
                },
            );

            // Diagonal Line bench
            group.bench_with_input(
                BenchmarkId::new("Diagonal", &parameter_string),
                &(p0_d, p1_d),
                |b, &(p0, p1)| {
                    let mut img = Image::new(image_size).unwrap();
                    b.iter(|| draw_line(&mut img, p0, p1, color).unwrap())
                },
            );
        }
        group.finish();
    }

    //rectangle benchmarks
    {
        let mut group = c.benchmark_group("Draw Filled Rect");

        for (width, height) in sizes.iter() {
            let image_size = [*width, *height].into();
            let parameter_string = format!("{}x{}", width, height);

            let margin = 50;
            let inner = (
                (margin, margin),
                ((*width as i64) - margin, (*height as i64) - margin),
            );
            let clipped = ((-margin, -margin), ((*width as i64) / 2, (*height as i64) * 2));

            group.bench_with_input(
                BenchmarkId::new("Inner", &parameter_string),
                &inner,
                |b, &(p0, p1)| {
                    let mut img = Image::new(image_size).unwrap();
                    b.iter(|| draw_filled_rect(&mut img, p0, p1, color).unwrap())
                },
            );

            group.bench_with_input(
                BenchmarkId::new("Clipped", &parameter_string),
                &clipped,
                |b, &(p0, p1)| {
                    let mut img = Image::new(image_size).unwrap();
                    b.iter(|| draw_filled_rect(&mut img, p0, p1, color).unwrap())
                },
            );
        }
        group.finish();
    }
}

criterion_group!(benches, bench_draw);
criterion_main!(benches);
