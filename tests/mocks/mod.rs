mod mock_lead_source;

pub use mock_lead_source::MockLeadSource;
