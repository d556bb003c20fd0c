use fall_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sphere_mass = 60.0; // kg
    let sphere_area = 1.0; // m²
    let drop_height = 10.0; // m

    let mut telemetry = Telemetry::new();

    for body in [Body::earth(), Body::mars()] {
        let parameters =
            ScenarioFactory::create_drop(&body, sphere_mass, sphere_area, drop_height);

        let trajectory = simulate(&parameters)?;
        telemetry.collect_data(&body.name, &trajectory);
    }

    telemetry.display_data();

    Ok(())
}
