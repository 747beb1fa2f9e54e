mod get_profile_by_id_command;
mod get_profile_by_id_use_case;

pub use get_profile_by_id_command::GetProfileByIdCommand;
pub use get_profile_by_id_use_case::GetProfileByIdUseCase;
