
// rate values arrive as json floating point and narrow to int64
fn de_i64_number<'de, D>(d: D) -> Result<i64, D::Error>
where D: serde::Deserializer<'de> {
    let f = f64::deserialize(d)?;
    Ok(f as i64)
}

/*
* resource pricing of contract execution
*/
#[derive(Default, Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GasPrice {
    #[serde(default, deserialize_with = "de_i64_number")]
    pub cpu_rate: i64,
    #[serde(default, deserialize_with = "de_i64_number")]
    pub mem_rate: i64,
    #[serde(default, deserialize_with = "de_i64_number")]
    pub disk_rate: i64,
    #[serde(default, deserialize_with = "de_i64_number")]
    pub xfee_rate: i64,
}
