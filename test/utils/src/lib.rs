pub fn plants_fixture() -> &'static str {
    return r#"
[
    {
        "plant_id": 1,
        "name": "Ficus",
        "species": "F. elastica",
        "status": "healthy"
    },
    {
        "plant_id": 2,
        "name": "Monstera",
        "species": "M. deliciosa",
        "status": "thirsty",
        "plantType_id": 4
    },
    {
        "name": "Aloe",
        "species": "A. vera",
        "status": "healthy"
    }
]
"#
    .trim();
}

pub fn alert_fixture() -> &'static str {
    return r#"
{
    "message": "Water plant 3",
    "plant_id": 3,
    "timestamp": "2024-05-14 18:32:07"
}
"#
    .trim();
}
