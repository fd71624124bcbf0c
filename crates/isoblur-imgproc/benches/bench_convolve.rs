use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use isoblur_image::{Image, ImageSize};
use isoblur_imgproc::blur::gaussian_blur;
use isoblur_imgproc::filter::{convolve, kernels::gaussian_kernel_2d};

fn bench_convolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gaussian Blur");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        for kernel_size in [3usize, 5, 9].iter() {
            group.throughput(criterion::Throughput::Elements(
                (*width * *height * *kernel_size * *kernel_size) as u64,
            ));

            let parameter_string = format!("{}x{}x{}", width, height, kernel_size);

            let image_size = ImageSize {
                width: *width,
                height: *height,
            };
            let plane_data = (0..width * height).map(|x| (x % 256) as u8).collect();
            let plane = Image::<u8, 1>::new(image_size, plane_data).unwrap();
            let image = Image::<u8, 3>::from_size_val(image_size, 127).unwrap();
            let kernel = gaussian_kernel_2d(*kernel_size, 1.5).unwrap();

            group.bench_with_input(
                BenchmarkId::new("convolve_plane", &parameter_string),
                &plane,
                |b, src| {
                    let mut dst = Image::from_size_val(src.size(), 0u8).unwrap();
                    b.iter(|| black_box(convolve(src, &mut dst, &kernel)))
                },
            );

            group.bench_with_input(
                BenchmarkId::new("gaussian_blur_rgb8", &parameter_string),
                &image,
                |b, src| {
                    let mut dst = Image::from_size_val(src.size(), 0u8).unwrap();
                    b.iter(|| {
                        black_box(gaussian_blur(src, &mut dst, *kernel_size, 1.5, |_| {}))
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_convolve);
criterion_main!(benches);
