#[cfg(test)]
#[path = "../../tests/unit/format/instance_test.rs"]
mod instance_test;

use crate::models::{Instance, validate_instance};
use crate::utils::{GenericError, GenericResult};
use std::io::{BufReader, BufWriter, Read, Write};

/// Deserializes instance in json format from `BufReader` and validates it.
/// When `strict` is set, limits of the reference problem are enforced too.
pub fn deserialize_instance<R: Read>(reader: BufReader<R>, strict: bool) -> Result<Instance, Vec<GenericError>> {
    let instance: Instance = serde_json::from_reader(reader)
        .map_err(|err| vec![GenericError::from(format!("cannot deserialize instance, check input json: '{err}'"))])?;

    validate_instance(&instance, strict)?;

    Ok(instance)
}

/// Serializes `instance` in json to `writer`.
pub fn serialize_instance<W: Write>(instance: &Instance, writer: &mut BufWriter<W>) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, instance).map_err(GenericError::from)
}
