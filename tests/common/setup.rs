use taflmind::prelude::*;

pub fn setup() -> Result<()>
{
    env_logger::builder()
        .is_test(true)
        .try_init()
        .map_err(|_| Error::new(Kind::InternalError, "Could not initialize logger.".into()))
}
