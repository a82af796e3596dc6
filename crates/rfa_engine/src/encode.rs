use reqwest::multipart::{Form, Part};
use rfa_core::SubmissionRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPart {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub name: &'static str,
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Form fields in wire order, kept separate from reqwest so they can be inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartBody {
    pub text: Vec<TextPart>,
    pub files: Vec<FilePart>,
}

impl MultipartBody {
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.text
            .iter()
            .find(|part| part.name == name)
            .map(|part| part.value.as_str())
    }

    pub fn file(&self, name: &str) -> Option<&FilePart> {
        self.files.iter().find(|part| part.name == name)
    }

    /// Total payload bytes of the attached files.
    pub fn file_bytes(&self) -> usize {
        self.files.iter().map(|part| part.bytes.len()).sum()
    }

    /// reqwest derives the `multipart/form-data` boundary header from this form.
    pub fn into_form(self) -> Form {
        let form = self
            .text
            .into_iter()
            .fold(Form::new(), |form, part| form.text(part.name, part.value));
        self.files.into_iter().fold(form, |form, part| {
            form.part(part.name, Part::bytes(part.bytes).file_name(part.filename))
        })
    }
}

pub fn encode(request: SubmissionRequest) -> MultipartBody {
    let text = vec![
        text_part("jobName", request.job_name),
        text_part("mode", request.mode.as_str()),
        text_part("hotspots", request.hotspots),
        text_part("rfDiffusionDesigns", request.rf_diffusion_designs.to_string()),
        text_part("proteinMPNNDesigns", request.protein_mpnn_designs.to_string()),
        text_part("designLoops", request.design_loops),
    ];
    let files = vec![
        FilePart {
            name: "frameworkFile",
            filename: request.framework_file.filename,
            bytes: request.framework_file.bytes,
        },
        FilePart {
            name: "targetFile",
            filename: request.target_file.filename,
            bytes: request.target_file.bytes,
        },
    ];
    MultipartBody { text, files }
}

fn text_part(name: &'static str, value: impl Into<String>) -> TextPart {
    TextPart {
        name,
        value: value.into(),
    }
}
