use popstat_extract::extract;

/// Synthetic page shaped like the UN population table.
fn synthetic_page(rows: usize) -> String {
    let mut html = String::from(
        "<html><body><table class=\"wikitable sortable\">\
         <tr><th rowspan=\"2\">Location</th><th colspan=\"2\">Population</th>\
         <th rowspan=\"2\">Change</th><th rowspan=\"2\">Region</th></tr>\
         <tr><th>2022</th><th>2023</th></tr>",
    );
    for i in 0..rows {
        html.push_str(&format!(
            "<tr><td><a href=\"/wiki/C{i}\">Country {i}</a><sup>[{i}]</sup></td>\
             <td>{i},000,000</td><td>{i},123,456</td><td>+0.5%</td><td>Region {}</td></tr>",
            i % 6
        ));
    }
    html.push_str("</table></body></html>");
    html
}

#[divan::bench(args = [50, 250, 1000])]
fn extract_rows(bencher: divan::Bencher, rows: usize) {
    let html = synthetic_page(rows);
    bencher.bench(|| extract(divan::black_box(&html)));
}

fn main() {
    divan::main();
}
