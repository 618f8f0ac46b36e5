// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use marketwave::{specs::squad, values};

/// A squad page with `n` player rows in the shape of the live site.
fn synthetic_page(n: usize) -> String {
    let mut rows = String::new();
    for i in 0..n {
        rows.push_str(&format!(
            r#"<tr class="odd">
                <td class="zentriert rueckennummer"><div class="rn_nummer">{i}</div></td>
                <td class="posrela"><table class="inline-table">
                    <tr><td rowspan="2"><img src="/p/{i}.jpg" class="bilderrahmen-fixed"></td>
                        <td class="hauptlink"><a href="/player-{i}/profil">Player {i}</a></td></tr>
                    <tr><td>Centre-Forward</td></tr></table></td>
                <td class="zentriert">Jan 1, 2000 (24)</td>
                <td class="zentriert"><img src="/flags/1.png" class="flaggenrahmen"></td>
                <td class="rechts hauptlink"><a href="/mw/{i}">€{}.{:02}m</a></td>
            </tr>"#,
            i % 200,
            i % 100
        ));
    }
    format!(
        r#"<html><body><div id="tm-main"><div class="row vereinsstartseite"><div class="large-8 columns">
           <div class="box"><div class="responsive-table"><table class="items">
           <thead><tr><th>#</th><th>Player</th></tr></thead><tbody>{rows}</tbody>
           </table></div></div></div></div></div></body></html>"#
    )
}

fn bench_extract(c: &mut Criterion) {
    let doc = synthetic_page(40);
    let big = synthetic_page(1000);

    c.bench_function("squad_extract_40", |b| {
        b.iter(|| squad::extract(black_box(doc.as_bytes())).map(|rows| rows.len()))
    });

    c.bench_function("squad_extract_1000", |b| {
        b.iter(|| squad::extract(black_box(big.as_bytes())).map(|rows| rows.len()))
    });

    let texts: Vec<String> = squad::extract(doc.as_bytes())
        .map(|rows| rows.into_iter().map(|(_, v)| v).collect())
        .unwrap_or_default();
    c.bench_function("normalize_values", |b| {
        b.iter(|| texts.iter().filter_map(|t| values::normalize(black_box(t))).sum::<f64>())
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
