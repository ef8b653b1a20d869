//! Group-level fuel economy averages

use fueleco_types::{EmptyAggregateError, Stats, Vehicle};

/// Arithmetic mean of city, highway and combined figures over `vehicles`.
///
/// Order of the input does not matter. An empty group has no mean and is
/// reported as [`EmptyAggregateError`].
pub fn aggregate<'a, I>(vehicles: I) -> Result<Stats, EmptyAggregateError>
where
    I: IntoIterator<Item = &'a Vehicle>,
{
    let mut count: u64 = 0;
    let mut city: u64 = 0;
    let mut highway: u64 = 0;
    let mut combined: u64 = 0;

    for vehicle in vehicles {
        count += 1;
        city += u64::from(vehicle.city_mpg);
        highway += u64::from(vehicle.highway_mpg);
        combined += u64::from(vehicle.combined_mpg);
    }

    if count == 0 {
        return Err(EmptyAggregateError);
    }

    let n = count as f64;
    Ok(Stats {
        avg_city: city as f64 / n,
        avg_highway: highway as f64 / n,
        avg_combined: combined as f64 / n,
    })
}
