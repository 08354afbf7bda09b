use weather_stats::WeatherData;

fn main() {
    let file = std::env::args().nth(1).expect("Missing filename");
    println!("opening {file}");

    let data = WeatherData::load(&file).unwrap();
    println!("{}", data.stats);

    if data.is_empty() {
        return;
    }
    println!(
        "Mean temp of the month: {:.1}",
        data.rows.iter().map(|row| row.average()).sum::<f64>() / data.rows.len() as f64
    );
}
