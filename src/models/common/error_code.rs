/// 统一响应中的业务错误码
///
/// 按区段划分：1xxx 通用，2xxx 认证，3xxx 文件，4xxx 学习业务，5xxx 服务端。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1009,
    RateLimitExceeded = 1029,

    // 认证
    AuthFailed = 2001,
    UserNameInvalid = 2002,
    UserEmailInvalid = 2003,
    UserPasswordInvalid = 2004,
    UserAlreadyExists = 2005,

    // 文件
    FileNotFound = 3001,
    FileTypeNotAllowed = 3002,
    FileSizeExceeded = 3003,
    FileUploadFailed = 3004,
    MultifileUploadNotAllowed = 3005,

    // 学习业务
    MaterialLocked = 4001,
    McqNotFound = 4002,
    SubmissionNotFound = 4003,
    CertificateNotFound = 4004,

    // 服务端
    InternalServerError = 5000,
}
