use plotters::prelude::*;
use weather_stats::{WeatherData, WeatherRow};

fn main() {
    let input = std::env::args().nth(1).expect("Missing filename");
    println!("opening {input}");
    let output = format!("{input}.png");

    let data = WeatherData::load(&input).unwrap();
    if data.is_empty() {
        println!("nothing to plot");
        return;
    }

    let first_day = data.rows.iter().map(|row| row.day).min().unwrap();
    let last_day = data.rows.iter().map(|row| row.day).max().unwrap();
    let low = data
        .rows
        .iter()
        .map(|row| row.min_temp)
        .min_by(|left, right| left.total_cmp(right))
        .unwrap();
    let high = data
        .rows
        .iter()
        .map(|row| row.max_temp)
        .max_by(|left, right| left.total_cmp(right))
        .unwrap();

    let root = BitMapBackend::new(&output, (1920, 1080)).into_drawing_area();
    root.fill(&WHITE).unwrap();
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Temperatures of {input}"),
            ("sans-serif", 100).into_font(),
        )
        .margin(5)
        .x_label_area_size(80)
        .y_label_area_size(80)
        .build_cartesian_2d(first_day..last_day, low..high)
        .unwrap();

    chart.configure_mesh().draw().unwrap();

    let series: [(&str, fn(&WeatherRow) -> f64, RGBColor); 3] = [
        ("Average temperature", WeatherRow::average, GREEN),
        ("Max temperature", |row| row.max_temp, RED),
        ("Min temperature", |row| row.min_temp, BLUE),
    ];
    for (label, value, color) in series {
        chart
            .draw_series(LineSeries::new(
                data.rows.iter().map(|row| (row.day, value(row))),
                color,
            ))
            .unwrap()
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .unwrap();

    root.present().unwrap();
}
