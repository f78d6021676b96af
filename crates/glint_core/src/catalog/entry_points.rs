// Entry point declarations. Data only.

crate::entry_points! {
    core {
        BindTexture => "void glBindTexture(GLenum target, GLuint texture)",
        BlendFunc => "void glBlendFunc(GLenum sfactor, GLenum dfactor)",
        Clear => "void glClear(GLbitfield mask)",
        ClearColor => "void glClearColor(GLfloat red, GLfloat green, GLfloat blue, GLfloat alpha)",
        ClearDepth => "void glClearDepth(GLdouble depth)",
        ClearStencil => "void glClearStencil(GLint s)",
        ColorMask => "void glColorMask(GLboolean red, GLboolean green, GLboolean blue, GLboolean alpha)",
        CopyTexImage2D => "void glCopyTexImage2D(GLenum target, GLint level, GLenum internalformat, GLint x, GLint y, GLsizei width, GLsizei height, GLint border)",
        CopyTexSubImage2D => "void glCopyTexSubImage2D(GLenum target, GLint level, GLint xoffset, GLint yoffset, GLint x, GLint y, GLsizei width, GLsizei height)",
        CullFace => "void glCullFace(GLenum mode)",
        DeleteTextures => "void glDeleteTextures(GLsizei n, const GLuint *textures)",
        DepthFunc => "void glDepthFunc(GLenum func)",
        DepthMask => "void glDepthMask(GLboolean flag)",
        DepthRange => "void glDepthRange(GLdouble nearVal, GLdouble farVal)",
        Disable => "void glDisable(GLenum cap)",
        DrawArrays => "void glDrawArrays(GLenum mode, GLint first, GLsizei count)",
        DrawBuffer => "void glDrawBuffer(GLenum buf)",
        DrawElements => "void glDrawElements(GLenum mode, GLsizei count, GLenum type, const void *indices)",
        Enable => "void glEnable(GLenum cap)",
        Finish => "void glFinish(void)",
        Flush => "void glFlush(void)",
        FrontFace => "void glFrontFace(GLenum mode)",
        GenTextures => "void glGenTextures(GLsizei n, GLuint *textures)",
        GetError => "GLenum glGetError(void)",
        GetFloatv => "void glGetFloatv(GLenum pname, GLfloat *data)",
        GetIntegerv => "void glGetIntegerv(GLenum pname, GLint *data)",
        GetString => "const GLubyte *glGetString(GLenum name)",
        GetTexImage => "void glGetTexImage(GLenum target, GLint level, GLenum format, GLenum type, void *pixels)",
        Hint => "void glHint(GLenum target, GLenum mode)",
        IsEnabled => "GLboolean glIsEnabled(GLenum cap)",
        IsTexture => "GLboolean glIsTexture(GLuint texture)",
        LineWidth => "void glLineWidth(GLfloat width)",
        PixelStorei => "void glPixelStorei(GLenum pname, GLint param)",
        PointSize => "void glPointSize(GLfloat size)",
        PolygonMode => "void glPolygonMode(GLenum face, GLenum mode)",
        PolygonOffset => "void glPolygonOffset(GLfloat factor, GLfloat units)",
        ReadBuffer => "void glReadBuffer(GLenum mode)",
        ReadPixels => "void glReadPixels(GLint x, GLint y, GLsizei width, GLsizei height, GLenum format, GLenum type, void *pixels)",
        Scissor => "void glScissor(GLint x, GLint y, GLsizei width, GLsizei height)",
        StencilFunc => "void glStencilFunc(GLenum func, GLint ref, GLuint mask)",
        StencilMask => "void glStencilMask(GLuint mask)",
        StencilOp => "void glStencilOp(GLenum sfail, GLenum dpfail, GLenum dppass)",
        TexImage1D => "void glTexImage1D(GLenum target, GLint level, GLint internalformat, GLsizei width, GLint border, GLenum format, GLenum type, const void *data)",
        TexImage2D => "void glTexImage2D(GLenum target, GLint level, GLint internalformat, GLsizei width, GLsizei height, GLint border, GLenum format, GLenum type, const void *data)",
        TexParameterf => "void glTexParameterf(GLenum target, GLenum pname, GLfloat param)",
        TexParameteri => "void glTexParameteri(GLenum target, GLenum pname, GLint param)",
        TexSubImage2D => "void glTexSubImage2D(GLenum target, GLint level, GLint xoffset, GLint yoffset, GLsizei width, GLsizei height, GLenum format, GLenum type, const void *pixels)",
        Viewport => "void glViewport(GLint x, GLint y, GLsizei width, GLsizei height)",
    }
    extension {
        ActiveTexture => "void glActiveTexture(GLenum texture)",
        AttachShader => "void glAttachShader(GLuint program, GLuint shader)",
        BeginQuery => "void glBeginQuery(GLenum target, GLuint id)",
        BindAttribLocation => "void glBindAttribLocation(GLuint program, GLuint index, const GLchar *name)",
        BindBuffer => "void glBindBuffer(GLenum target, GLuint buffer)",
        BindBufferBase => "void glBindBufferBase(GLenum target, GLuint index, GLuint buffer)",
        BindBufferRange => "void glBindBufferRange(GLenum target, GLuint index, GLuint buffer, GLintptr offset, GLsizeiptr size)",
        BindFramebuffer => "void glBindFramebuffer(GLenum target, GLuint framebuffer)",
        BindRenderbuffer => "void glBindRenderbuffer(GLenum target, GLuint renderbuffer)",
        BindSampler => "void glBindSampler(GLuint unit, GLuint sampler)",
        BindTextureUnit => "void glBindTextureUnit(GLuint unit, GLuint texture)",
        BindVertexArray => "void glBindVertexArray(GLuint array)",
        BlendEquation => "void glBlendEquation(GLenum mode)",
        BlendFuncSeparate => "void glBlendFuncSeparate(GLenum srcRGB, GLenum dstRGB, GLenum srcAlpha, GLenum dstAlpha)",
        BlitFramebuffer => "void glBlitFramebuffer(GLint srcX0, GLint srcY0, GLint srcX1, GLint srcY1, GLint dstX0, GLint dstY0, GLint dstX1, GLint dstY1, GLbitfield mask, GLenum filter)",
        BufferData => "void glBufferData(GLenum target, GLsizeiptr size, const void *data, GLenum usage)",
        BufferSubData => "void glBufferSubData(GLenum target, GLintptr offset, GLsizeiptr size, const void *data)",
        CheckFramebufferStatus => "GLenum glCheckFramebufferStatus(GLenum target)",
        CompileShader => "void glCompileShader(GLuint shader)",
        CreateProgram => "GLuint glCreateProgram(void)",
        CreateShader => "GLuint glCreateShader(GLenum shaderType)",
        DebugMessageCallback => "void glDebugMessageCallback(GLDEBUGPROC callback, const void *userParam)",
        DeleteBuffers => "void glDeleteBuffers(GLsizei n, const GLuint *buffers)",
        DeleteFramebuffers => "void glDeleteFramebuffers(GLsizei n, const GLuint *framebuffers)",
        DeleteProgram => "void glDeleteProgram(GLuint program)",
        DeleteQueries => "void glDeleteQueries(GLsizei n, const GLuint *ids)",
        DeleteRenderbuffers => "void glDeleteRenderbuffers(GLsizei n, const GLuint *renderbuffers)",
        DeleteShader => "void glDeleteShader(GLuint shader)",
        DeleteVertexArrays => "void glDeleteVertexArrays(GLsizei n, const GLuint *arrays)",
        DisableVertexAttribArray => "void glDisableVertexAttribArray(GLuint index)",
        DrawArraysInstanced => "void glDrawArraysInstanced(GLenum mode, GLint first, GLsizei count, GLsizei instancecount)",
        DrawBuffers => "void glDrawBuffers(GLsizei n, const GLenum *bufs)",
        DrawElementsInstanced => "void glDrawElementsInstanced(GLenum mode, GLsizei count, GLenum type, const void *indices, GLsizei instancecount)",
        EnableVertexAttribArray => "void glEnableVertexAttribArray(GLuint index)",
        EndQuery => "void glEndQuery(GLenum target)",
        FramebufferRenderbuffer => "void glFramebufferRenderbuffer(GLenum target, GLenum attachment, GLenum renderbuffertarget, GLuint renderbuffer)",
        FramebufferTexture2D => "void glFramebufferTexture2D(GLenum target, GLenum attachment, GLenum textarget, GLuint texture, GLint level)",
        GenBuffers => "void glGenBuffers(GLsizei n, GLuint *buffers)",
        GenFramebuffers => "void glGenFramebuffers(GLsizei n, GLuint *framebuffers)",
        GenQueries => "void glGenQueries(GLsizei n, GLuint *ids)",
        GenRenderbuffers => "void glGenRenderbuffers(GLsizei n, GLuint *renderbuffers)",
        GenVertexArrays => "void glGenVertexArrays(GLsizei n, GLuint *arrays)",
        GenerateMipmap => "void glGenerateMipmap(GLenum target)",
        GetAttribLocation => "GLint glGetAttribLocation(GLuint program, const GLchar *name)",
        GetProgramInfoLog => "void glGetProgramInfoLog(GLuint program, GLsizei maxLength, GLsizei *length, GLchar *infoLog)",
        GetProgramiv => "void glGetProgramiv(GLuint program, GLenum pname, GLint *params)",
        GetQueryObjectui64v => "void glGetQueryObjectui64v(GLuint id, GLenum pname, GLuint64 *params)",
        GetShaderInfoLog => "void glGetShaderInfoLog(GLuint shader, GLsizei maxLength, GLsizei *length, GLchar *infoLog)",
        GetShaderiv => "void glGetShaderiv(GLuint shader, GLenum pname, GLint *params)",
        GetStringi => "const GLubyte *glGetStringi(GLenum name, GLuint index)",
        GetUniformBlockIndex => "GLuint glGetUniformBlockIndex(GLuint program, const GLchar *uniformBlockName)",
        GetUniformLocation => "GLint glGetUniformLocation(GLuint program, const GLchar *name)",
        LinkProgram => "void glLinkProgram(GLuint program)",
        MapBufferRange => "void *glMapBufferRange(GLenum target, GLintptr offset, GLsizeiptr length, GLbitfield access)",
        ObjectLabel => "void glObjectLabel(GLenum identifier, GLuint name, GLsizei length, const GLchar *label)",
        QueryCounter => "void glQueryCounter(GLuint id, GLenum target)",
        RenderbufferStorage => "void glRenderbufferStorage(GLenum target, GLenum internalformat, GLsizei width, GLsizei height)",
        RenderbufferStorageMultisample => "void glRenderbufferStorageMultisample(GLenum target, GLsizei samples, GLenum internalformat, GLsizei width, GLsizei height)",
        ShaderSource => "void glShaderSource(GLuint shader, GLsizei count, const GLchar **string, const GLint *length)",
        TexImage3D => "void glTexImage3D(GLenum target, GLint level, GLint internalformat, GLsizei width, GLsizei height, GLsizei depth, GLint border, GLenum format, GLenum type, const void *data)",
        TexStorage2D => "void glTexStorage2D(GLenum target, GLsizei levels, GLenum internalformat, GLsizei width, GLsizei height)",
        Uniform1f => "void glUniform1f(GLint location, GLfloat v0)",
        Uniform1i => "void glUniform1i(GLint location, GLint v0)",
        Uniform2f => "void glUniform2f(GLint location, GLfloat v0, GLfloat v1)",
        Uniform3f => "void glUniform3f(GLint location, GLfloat v0, GLfloat v1, GLfloat v2)",
        Uniform4f => "void glUniform4f(GLint location, GLfloat v0, GLfloat v1, GLfloat v2, GLfloat v3)",
        UniformBlockBinding => "void glUniformBlockBinding(GLuint program, GLuint uniformBlockIndex, GLuint uniformBlockBinding)",
        UniformMatrix4fv => "void glUniformMatrix4fv(GLint location, GLsizei count, GLboolean transpose, const GLfloat *value)",
        UnmapBuffer => "GLboolean glUnmapBuffer(GLenum target)",
        UseProgram => "void glUseProgram(GLuint program)",
        VertexAttribDivisor => "void glVertexAttribDivisor(GLuint index, GLuint divisor)",
        VertexAttribIPointer => "void glVertexAttribIPointer(GLuint index, GLint size, GLenum type, GLsizei stride, const void *pointer)",
        VertexAttribPointer => "void glVertexAttribPointer(GLuint index, GLint size, GLenum type, GLboolean normalized, GLsizei stride, const void *pointer)",
    }
}
