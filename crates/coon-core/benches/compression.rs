use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use coon_core::{compress, decompress, Strategy};

const LOGIN_SCREEN: &str = r#"class LoginScreen extends StatelessWidget {
  final TextEditingController emailController = TextEditingController();

  @override
  Widget build(BuildContext context) {
    return Scaffold(
      body: Column(
        children: [
          Text("Welcome"),
          SizedBox(height: 16.0),
          Container(
            padding: EdgeInsets.all(16.0),
            child: Text("Sign in to continue"),
          ),
        ],
      ),
    );
  }
}"#;

fn bench_pipelines(c: &mut Criterion) {
    c.bench_function("compress_login_screen", |b| {
        b.iter(|| compress(black_box(LOGIN_SCREEN), Strategy::Basic))
    });

    let coon = compress(LOGIN_SCREEN, Strategy::Basic).compressed;
    c.bench_function("decompress_login_screen", |b| {
        b.iter(|| decompress(black_box(&coon)))
    });
}

criterion_group!(benches, bench_pipelines);
criterion_main!(benches);
